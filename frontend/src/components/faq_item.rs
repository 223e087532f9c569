use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: String,
    pub answer: String,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class="faq-item">
            <h4 class="faq-question">{&props.question}</h4>
            <p class="faq-answer">{&props.answer}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn question_and_answer_are_both_visible() {
        let html = ServerRenderer::<FaqItem>::with_props(|| FaqItemProps {
            question: "Pergunta?".to_string(),
            answer: "Resposta.".to_string(),
        })
        .hydratable(false)
        .render()
        .await;

        assert!(html.starts_with("<div class=\"faq-item\">"));
        assert!(html.contains("<h4 class=\"faq-question\">Pergunta?</h4><p class=\"faq-answer\">Resposta.</p>"));
        assert!(!html.contains("<button"));
    }
}
