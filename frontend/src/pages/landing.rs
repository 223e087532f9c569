use log::debug;
use yew::prelude::*;

use crate::clock::Clock;
use crate::components::faq_item::FaqItem;
use crate::components::icons::IconGlyph;
use crate::components::pricing_card::{PricingCard, PricingCardProps};
use crate::config;
use crate::content::{support_contact, Icon, FAQ_ENTRIES, PRICING_PLANS};

#[function_component(Brand)]
fn brand() -> Html {
    html! {
        <nav class="brand-nav">
            <div class="brand">
                <div class="brand-mark">
                    <IconGlyph icon={Icon::Rocket} />
                </div>
                <span class="brand-name">{"Vibe"}<span class="accent">{"bit"}</span></span>
            </div>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactButtonProps {
    pub href: String,
}

#[function_component(ContactButton)]
pub fn contact_button(props: &ContactButtonProps) -> Html {
    html! {
        <a
            href={props.href.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="contact-fab"
            aria-label="Suporte via WhatsApp"
        >
            <span class="contact-tooltip">{"Suporte"}</span>
            <IconGlyph icon={Icon::MessageCircle} />
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    html! {
        <footer class="page-footer">
            <p>{format!("© {} {}. Todos os direitos reservados.", props.year, config::BRAND_NAME)}</p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    #[prop_or_default]
    pub clock: Clock,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let contact_url = support_contact().deep_link();
    let year = props.clock.year();
    debug!("Rendering landing page for {}", year);

    html! {
        <div class="landing-page">
            <Brand />

            <header class="hero">
                <h1>
                    {"Crie seu site profissional"}<br />
                    <span class="accent">{"em instantes"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Escolha o plano ideal para o seu momento e deixe a nossa inteligência artificial fazer o trabalho pesado por você."}
                </p>
            </header>

            <main class="landing-main">
                <div class="pricing-grid">
                    { for PRICING_PLANS.iter().map(|plan| {
                        let card = PricingCardProps::from(plan);
                        html! { <PricingCard ..card /> }
                    }) }
                </div>

                <section class="faq-section">
                    <div class="faq-header">
                        <h2>{"Dúvidas Frequentes"}</h2>
                        <p>{"Tudo o que você precisa saber para começar com tranquilidade."}</p>
                    </div>
                    <div class="faq-list">
                        { for FAQ_ENTRIES.iter().map(|entry| html! {
                            <FaqItem
                                question={entry.question.to_string()}
                                answer={entry.answer.to_string()}
                            />
                        }) }
                    </div>
                </section>
            </main>

            <ContactButton href={contact_url} />

            <Footer year={year} />

            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    background: #f9f9f9;
                    color: #18181b;
                    font-family: ui-sans-serif, system-ui, sans-serif;
                }

                .landing-page ::selection {
                    background: #d1fae5;
                    color: #064e3b;
                }

                .accent {
                    color: #10b981;
                }

                @keyframes pop-in {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes rise-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes grow-in {
                    from { opacity: 0; transform: scale(0); }
                    to { opacity: 1; transform: scale(1); }
                }

                .brand-nav {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 3rem 1.5rem;
                    display: flex;
                    justify-content: center;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    animation: pop-in 0.4s ease-out both;
                }

                .brand-mark {
                    background: #18181b;
                    color: #34d399;
                    padding: 0.5rem;
                    border-radius: 0.75rem;
                    display: flex;
                }

                .brand-mark .icon {
                    width: 2rem;
                    height: 2rem;
                }

                .brand-name {
                    font-size: 1.5rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    text-transform: uppercase;
                }

                .hero {
                    max-width: 56rem;
                    margin: 0 auto 4rem;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 3rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    margin: 0 0 1.5rem;
                    animation: rise-in 0.5s ease-out both;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #71717a;
                    max-width: 42rem;
                    margin: 0 auto;
                    animation: rise-in 0.5s ease-out 0.1s both;
                }

                .landing-main {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem 6rem;
                }

                .pricing-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    align-items: start;
                }

                .faq-section {
                    max-width: 48rem;
                    margin: 8rem auto 0;
                }

                .faq-header {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .faq-header h2 {
                    font-size: 1.875rem;
                    font-weight: 900;
                    letter-spacing: -0.025em;
                    margin: 0 0 1rem;
                }

                .faq-header p {
                    color: #71717a;
                }

                .faq-list {
                    background: #ffffff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    border: 1px solid #f4f4f5;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .faq-item {
                    padding: 1.5rem 0;
                    border-bottom: 1px solid #f4f4f5;
                }

                .faq-question {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }

                .faq-answer {
                    color: #71717a;
                    font-size: 0.875rem;
                    line-height: 1.625;
                    margin: 0;
                }

                .contact-fab {
                    position: fixed;
                    bottom: 2rem;
                    right: 2rem;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    border-radius: 9999px;
                    background: #25d366;
                    color: #ffffff;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    animation: grow-in 0.3s ease-out both;
                    transition: transform 0.2s ease;
                }

                .contact-fab:hover,
                .contact-fab:focus-visible {
                    transform: scale(1.1);
                }

                .contact-fab:active {
                    transform: scale(0.9);
                }

                .contact-fab .icon {
                    width: 2rem;
                    height: 2rem;
                }

                .contact-tooltip {
                    position: absolute;
                    right: 100%;
                    margin-right: 1rem;
                    background: #ffffff;
                    color: #18181b;
                    padding: 0.5rem 1rem;
                    border-radius: 0.75rem;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    font-size: 0.875rem;
                    font-weight: 700;
                    white-space: nowrap;
                    pointer-events: none;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }

                .contact-fab:hover .contact-tooltip,
                .contact-fab:focus-visible .contact-tooltip {
                    opacity: 1;
                }

                .page-footer {
                    border-top: 1px solid #f4f4f5;
                    padding: 3rem 0;
                    text-align: center;
                    color: #a1a1aa;
                    font-size: 0.875rem;
                }

                @media (min-width: 768px) {
                    .hero h1 {
                        font-size: 3.75rem;
                    }

                    .pricing-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </div>
    }
}
