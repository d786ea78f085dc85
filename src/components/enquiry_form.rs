use log::info;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub enum FormField {
    Text {
        label: &'static str,
        placeholder: &'static str,
        kind: &'static str,
    },
    Select {
        label: &'static str,
        options: &'static [&'static str],
    },
    TextArea {
        label: &'static str,
        placeholder: &'static str,
        rows: u32,
    },
}

impl FormField {
    pub fn text(label: &'static str, placeholder: &'static str) -> Self {
        FormField::Text { label, placeholder, kind: "text" }
    }

    pub fn email(label: &'static str, placeholder: &'static str) -> Self {
        FormField::Text { label, placeholder, kind: "email" }
    }
}

#[derive(Properties, PartialEq)]
pub struct EnquiryFormProps {
    /// Names the form in logs.
    pub name: &'static str,
    pub fields: Vec<FormField>,
    pub submit_label: &'static str,
    #[prop_or_default]
    pub class: Classes,
}

/// Enquiry form. Submitting stays on the page; nothing is sent.
#[function_component(EnquiryForm)]
pub fn enquiry_form(props: &EnquiryFormProps) -> Html {
    let onsubmit = {
        let name = props.name;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            info!("{} form submitted", name);
        })
    };

    let render_field = |field: &FormField| match field {
        FormField::Text { label, placeholder, kind } => html! {
            <label class="form-field">
                <span>{*label}</span>
                <input type={*kind} placeholder={*placeholder} />
            </label>
        },
        FormField::Select { label, options } => html! {
            <label class="form-field">
                <span>{*label}</span>
                <select>
                    { for options.iter().map(|option| html! { <option>{*option}</option> }) }
                </select>
            </label>
        },
        FormField::TextArea { label, placeholder, rows } => html! {
            <label class="form-field wide">
                <span>{*label}</span>
                <textarea rows={rows.to_string()} placeholder={*placeholder}></textarea>
            </label>
        },
    };

    html! {
        <form class={classes!("enquiry-form", props.class.clone())} {onsubmit}>
            <div class="form-grid">
                { for props.fields.iter().map(render_field) }
            </div>
            <button type="submit" class="form-submit">{props.submit_label}</button>
            <style>
                {r#"
                .enquiry-form {
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid #fff;
                    border-radius: 2rem;
                    padding: 2.5rem;
                    box-shadow: 0 20px 40px rgba(11, 46, 51, 0.1);
                }
                .form-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1.5rem;
                    margin-bottom: 2rem;
                }
                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .form-field.wide {
                    grid-column: 1 / -1;
                }
                .form-field span {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    color: #4F7C82;
                }
                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 1rem;
                    border: 1px solid rgba(147, 177, 181, 0.4);
                    border-radius: 0.75rem;
                    background: rgba(184, 227, 233, 0.2);
                    color: #0B2E33;
                    font: inherit;
                    resize: none;
                }
                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: none;
                    border-color: #bf953f;
                }
                .form-submit {
                    width: 100%;
                    padding: 1.1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #0B2E33;
                    color: #fff;
                    font-weight: 700;
                    font-size: 1.1rem;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .form-submit:hover {
                    background: #bf953f;
                    color: #0B2E33;
                }
                @media (max-width: 768px) {
                    .form-grid {
                        grid-template-columns: 1fr;
                    }
                    .enquiry-form {
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </form>
    }
}
