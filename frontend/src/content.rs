//! Literal page content: plans, FAQ entries and the support contact.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config;

/// Characters left as-is by JS `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Glyphs the page knows how to draw. Rendered by `components::icons::IconGlyph`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Check,
    MessageCircle,
    Globe,
    Zap,
    Briefcase,
    Rocket,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPlan {
    pub title: &'static str,
    pub price: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
    pub icon: Icon,
    pub link: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactTarget {
    pub phone: &'static str,
    pub message: &'static str,
}

impl ContactTarget {
    /// WhatsApp click-to-chat link with the message prefilled.
    pub fn deep_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            utf8_percent_encode(self.message, URI_COMPONENT)
        )
    }
}

pub fn support_contact() -> ContactTarget {
    ContactTarget {
        phone: config::SUPPORT_WHATSAPP_NUMBER,
        message: config::SUPPORT_WHATSAPP_MESSAGE,
    }
}

pub const PRICING_PLANS: [PricingPlan; 3] = [
    PricingPlan {
        title: "Plano Start",
        price: "R$ 49",
        description: "Ideal para quem deseja ter um site profissional em instantes.",
        features: &[
            "1 site profissional",
            "Edições ilimitadas",
            "Suporte via e-mail",
        ],
        highlighted: false,
        icon: Icon::Globe,
        link: "https://mpago.la/2im86kW",
    },
    PricingPlan {
        title: "Plano Pro",
        price: "R$ 67",
        description: "Melhor custo-benefício para pequenos negócios em crescimento.",
        features: &[
            "3 sites profissionais",
            "Edições ilimitadas",
            "Suporte prioritário",
            "Integração com WhatsApp",
        ],
        highlighted: true,
        icon: Icon::Zap,
        link: "https://mpago.la/2RxV7iF",
    },
    PricingPlan {
        title: "Plano Business",
        price: "R$ 147",
        description: "Para quem quer criar vários sites ou é agência. Ganhe vendendo sites com IA.",
        features: &[
            "10 sites profissionais",
            "Edições ilimitadas",
            "Painel de agência",
            "Suporte via WhatsApp",
        ],
        highlighted: false,
        icon: Icon::Briefcase,
        link: "https://mpago.la/1BuYCtG",
    },
];

pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "É seguro realizar o pagamento?",
        answer: "Sim! Utilizamos o Mercado Pago como nossa plataforma de pagamentos, garantindo total segurança para seus dados e sua transação.",
    },
    FaqEntry {
        question: "Preciso de conhecimento técnico?",
        answer: "Absolutamente não. Nossa inteligência artificial cuida de toda a parte complexa. Você só precisa dizer o que quer e nós fazemos acontecer.",
    },
    FaqEntry {
        question: "Posso cancelar quando quiser?",
        answer: "Sim, não temos contratos de fidelidade. Você tem total liberdade para gerenciar seu plano conforme sua necessidade.",
    },
    FaqEntry {
        question: "Como recebo meu acesso?",
        answer: "Imediatamente! Você será direcionado para a nossa plataforma onde poderá resgatar o crédito referente ao plano adquirido. Ao resgatar o crédito, seu site será ativado instantaneamente.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_link_encodes_the_message() {
        assert_eq!(
            support_contact().deep_link(),
            "https://wa.me/5528999328644?text=Ol%C3%A1!%20Gostaria%20de%20saber%20mais%20sobre%20os%20planos%20de%20cria%C3%A7%C3%A3o%20de%20sites."
        );
    }

    #[test]
    fn message_keeps_uri_component_marks() {
        let target = ContactTarget { phone: "1", message: "Olá! (ok)*'~ a&b=c/d?" };
        assert_eq!(
            target.deep_link(),
            "https://wa.me/1?text=Ol%C3%A1!%20(ok)*'~%20a%26b%3Dc%2Fd%3F"
        );
    }

    #[test]
    fn phone_is_not_validated() {
        let target = ContactTarget { phone: "+55 (28) 9", message: "a&b" };
        assert_eq!(target.deep_link(), "https://wa.me/+55 (28) 9?text=a%26b");
    }

    #[test]
    fn only_the_pro_plan_is_highlighted() {
        let highlighted: Vec<_> = PRICING_PLANS
            .iter()
            .filter(|plan| plan.highlighted)
            .map(|plan| plan.title)
            .collect();
        assert_eq!(highlighted, ["Plano Pro"]);
    }

    #[test]
    fn every_plan_links_to_its_own_checkout() {
        let mut links: Vec<_> = PRICING_PLANS.iter().map(|plan| plan.link).collect();
        links.sort();
        links.dedup();
        assert_eq!(links.len(), 3);
        assert!(links.iter().all(|link| link.starts_with("https://mpago.la/")));
    }

    #[test]
    fn faq_entries_have_text() {
        assert!(FAQ_ENTRIES
            .iter()
            .all(|entry| !entry.question.is_empty() && !entry.answer.is_empty()));
    }
}
