use yew::prelude::*;

use crate::components::icons::IconGlyph;
use crate::components::reveal::use_reveal_once;
use crate::config;
use crate::content::{Icon, PricingPlan};

#[derive(Properties, PartialEq, Clone)]
pub struct PricingCardProps {
    pub title: String,
    pub price: String,
    pub description: String,
    pub features: Vec<String>,
    #[prop_or_default]
    pub highlight: bool,
    pub icon: Icon,
    pub link: String,
}

impl From<&PricingPlan> for PricingCardProps {
    fn from(plan: &PricingPlan) -> Self {
        Self {
            title: plan.title.to_string(),
            price: plan.price.to_string(),
            description: plan.description.to_string(),
            features: plan.features.iter().map(|f| f.to_string()).collect(),
            highlight: plan.highlighted,
            icon: plan.icon,
            link: plan.link.to_string(),
        }
    }
}

/// Plain string comparison: a price that reads exactly like the
/// "contact us" literal never gets the monthly suffix.
pub fn shows_monthly_suffix(price: &str) -> bool {
    price != config::CONTACT_PRICE
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let card_ref = use_node_ref();
    let revealed = use_reveal_once(card_ref.clone());

    let class = classes!(
        "pricing-card",
        props.highlight.then(|| "highlighted"),
        revealed.then(|| "revealed"),
    );

    html! {
        <div ref={card_ref} class={class}>
            {
                if props.highlight {
                    html! { <div class="best-value-badge">{"Melhor Custo-Benefício"}</div> }
                } else {
                    html! {}
                }
            }

            <div class="card-header">
                <div class="plan-icon">
                    <IconGlyph icon={props.icon} />
                </div>
                <h3>{&props.title}</h3>
                <p class="plan-description">{&props.description}</p>
            </div>

            <div class="price">
                <span class="amount">{&props.price}</span>
                {
                    if shows_monthly_suffix(&props.price) {
                        html! { <span class="period">{config::MONTHLY_SUFFIX}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <ul class="feature-list">
                { for props.features.iter().map(|feature| html! {
                    <li>
                        <IconGlyph icon={Icon::Check} class={classes!("check")} />
                        <span>{feature}</span>
                    </li>
                }) }
            </ul>

            <a
                href={props.link.clone()}
                target="_blank"
                rel="noopener noreferrer"
                class="plan-cta"
            >
                {"Quero esse plano"}
            </a>

            <style>
                {r#"
                .pricing-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #ffffff;
                    color: #18181b;
                    border: 1px solid #f4f4f5;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.5s ease, transform 0.5s ease, box-shadow 0.3s ease;
                }

                .pricing-card.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .pricing-card.revealed:hover {
                    transform: translateY(-5px);
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.08);
                }

                .pricing-card.highlighted {
                    background: #18181b;
                    color: #ffffff;
                    border-color: #27272a;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    z-index: 10;
                }

                .pricing-card.highlighted.revealed {
                    transform: scale(1.05);
                }

                .pricing-card.highlighted.revealed:hover {
                    transform: scale(1.05) translateY(-5px);
                }

                .best-value-badge {
                    position: absolute;
                    top: -1rem;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #10b981;
                    color: #ffffff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    white-space: nowrap;
                }

                .card-header {
                    margin-bottom: 1.5rem;
                }

                .plan-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                    background: #fafafa;
                    color: #52525b;
                }

                .pricing-card.highlighted .plan-icon {
                    background: #27272a;
                    color: #34d399;
                }

                .plan-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .card-header h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }

                .plan-description {
                    font-size: 0.875rem;
                    color: #71717a;
                    margin: 0;
                }

                .pricing-card.highlighted .plan-description {
                    color: #a1a1aa;
                }

                .price {
                    margin-bottom: 2rem;
                }

                .price .amount {
                    font-size: 2.25rem;
                    font-weight: 700;
                }

                .price .period {
                    font-size: 0.875rem;
                    color: #a1a1aa;
                }

                .pricing-card.highlighted .price .period {
                    color: #71717a;
                }

                .feature-list {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                    flex-grow: 1;
                }

                .feature-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    margin-bottom: 1rem;
                }

                .feature-list .check {
                    width: 1.25rem;
                    height: 1.25rem;
                    flex-shrink: 0;
                    color: #10b981;
                }

                .pricing-card.highlighted .feature-list .check {
                    color: #34d399;
                }

                .plan-cta {
                    display: block;
                    width: 100%;
                    padding: 1rem 0;
                    border-radius: 1rem;
                    font-weight: 600;
                    text-align: center;
                    text-decoration: none;
                    color: #ffffff;
                    background: #18181b;
                    transition: background 0.2s ease;
                }

                .plan-cta:hover {
                    background: #27272a;
                }

                .pricing-card.highlighted .plan-cta {
                    background: #10b981;
                }

                .pricing-card.highlighted .plan-cta:hover {
                    background: #34d399;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    fn card(title: &str, price: &str, highlight: bool) -> PricingCardProps {
        PricingCardProps {
            title: title.to_string(),
            price: price.to_string(),
            description: "Descrição".to_string(),
            features: vec!["primeiro".to_string(), "segundo".to_string(), "terceiro".to_string()],
            highlight,
            icon: Icon::Globe,
            link: "https://pay.example/checkout".to_string(),
        }
    }

    async fn render(props: PricingCardProps) -> String {
        ServerRenderer::<PricingCard>::with_props(move || props)
            .hydratable(false)
            .render()
            .await
    }

    #[test]
    fn suffix_is_hidden_only_for_the_contact_price() {
        assert!(!shows_monthly_suffix("Sob consulta"));
        assert!(shows_monthly_suffix("R$ 49"));
        assert!(shows_monthly_suffix("sob consulta"));
        assert!(shows_monthly_suffix(""));
    }

    #[tokio::test]
    async fn renders_plan_text_and_features_in_order() {
        let html = render(card("Plano Teste", "R$ 10", false)).await;

        assert!(html.contains("<h3>Plano Teste</h3>"));
        assert!(html.contains("R$ 10"));
        assert!(html.contains("Descrição"));
        let first = html.find("primeiro").unwrap();
        let second = html.find("segundo").unwrap();
        let third = html.find("terceiro").unwrap();
        assert!(first < second && second < third);
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[tokio::test]
    async fn monthly_suffix_follows_the_price_text() {
        let priced = render(card("A", "R$ 10", false)).await;
        assert!(priced.contains("/mês"));

        let on_request = render(card("B", "Sob consulta", false)).await;
        assert!(on_request.contains("Sob consulta"));
        assert!(!on_request.contains("/mês"));
    }

    #[tokio::test]
    async fn badge_only_on_highlighted_card() {
        let plain = render(card("A", "R$ 10", false)).await;
        assert!(!plain.contains("class=\"best-value-badge\""));
        assert!(!plain.contains("pricing-card highlighted"));

        let featured = render(card("B", "R$ 10", true)).await;
        assert!(featured.contains("class=\"pricing-card highlighted\""));
        assert!(featured.contains("Melhor Custo-Benefício"));
    }

    #[tokio::test]
    async fn checkout_link_opens_in_new_context_without_referrer() {
        let html = render(card("A", "R$ 10", false)).await;
        assert!(html.contains("href=\"https://pay.example/checkout\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("Quero esse plano"));
    }

    #[tokio::test]
    async fn empty_input_still_renders() {
        let mut props = card("", "", false);
        props.features.clear();
        let html = render(props).await;
        assert!(html.contains("class=\"pricing-card\""));
        assert!(!html.contains("<li>"));
    }
}
