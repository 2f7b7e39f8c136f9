use yew::prelude::*;
use web_sys::MouseEvent;

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How long does nano ceramic coating last?",
        "Depending on the package and how the car is maintained, our coatings last between 2 and 5 years. Every coating comes with a maintenance guide and a free first inspection.",
    ),
    (
        "Is paint protection film visible on the car?",
        "No. The film we install is optically clear and self-healing, so light swirl marks disappear with heat from the sun or warm water.",
    ),
    (
        "How long will my car be with you?",
        "Detailing is usually same-day. Ceramic coating takes 1 to 2 days to allow the layers to cure, and full-body PPF takes 2 to 3 days.",
    ),
    (
        "Do you restore bikes as well?",
        "Yes. Bike restoration covers paint correction, chrome polishing and a protective coating on painted and metal surfaces.",
    ),
    (
        "Can I wash the car right after coating?",
        "Please wait 7 days before the first wash so the coating fully cures. After that, a pH-neutral shampoo keeps it performing at its best.",
    ),
];

/// At most one answer is expanded at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    /// Opening an item closes every other; clicking the open item closes it.
    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", "glass-card", props.is_open.then(|| "active"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="faq-toggle">{if props.is_open { "−" } else { "+" }}</span>
            </button>
            if props.is_open {
                <div class="faq-answer">
                    <p>{&props.answer}</p>
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(Accordion::default);

    let items = FAQ_ITEMS.iter().enumerate().map(|(index, (question, answer))| {
        let on_toggle = {
            let accordion = accordion.clone();
            Callback::from(move |_| {
                log::debug!("FAQ item {} toggled", index);
                accordion.set(accordion.toggle(index));
            })
        };
        html! {
            <FaqItem
                key={index}
                question={*question}
                answer={*answer}
                is_open={accordion.is_open(index)}
                {on_toggle}
            />
        }
    });

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">{ for items }</div>
            <style>
                {r#"
                .faq-section {
                    max-width: 860px;
                    margin: 0 auto;
                    padding: 80px 20px;
                }
                .faq-item {
                    margin-bottom: 12px;
                    border-radius: 12px;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    background: rgba(0, 0, 0, 0.6);
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 18px 20px;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.05rem;
                    font-weight: 700;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-toggle {
                    font-size: 1.4rem;
                    color: #1fb8cd;
                }
                .faq-answer {
                    padding: 0 20px 18px;
                    color: #e0f8ff;
                    font-weight: 600;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_one_closes_the_other() {
        let accordion = Accordion::default().toggle(0).toggle(2);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn clicking_open_item_closes_it() {
        let accordion = Accordion::default().toggle(1).toggle(1);
        assert_eq!(accordion, Accordion::default());
    }
}
