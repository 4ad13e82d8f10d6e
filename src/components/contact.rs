use log::{info, warn};
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::content::{CONTACT_INFO, MAP_EMBED_URL};
use crate::hooks::{use_reveal, use_viewport};
use crate::motion::{RevealConfig, RevealStyle, WatchOptions};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Update the field whose form `name` matches. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let field = match name {
            "firstName" => &mut self.first_name,
            "lastName" => &mut self.last_name,
            "email" => &mut self.email,
            "subject" => &mut self.subject,
            "message" => &mut self.message,
            _ => return false,
        };
        *field = value;
        true
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[function_component(MapEmbed)]
fn map_embed() -> Html {
    let mounted = use_state(|| false);
    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                mounted.set(true);
                || ()
            },
            (),
        );
    }

    if !*mounted {
        return html! { <div class="map-placeholder"></div> };
    }

    html! {
        <div class="map-frame">
            <iframe
                src={MAP_EMBED_URL}
                style="border: 0;"
                allowfullscreen={true}
                loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>
            <div class="map-shade"></div>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let section_ref = use_node_ref();
    let info_ref = use_node_ref();
    let heading_view = use_viewport(section_ref.clone(), WatchOptions::once());
    let info_view = use_viewport(info_ref.clone(), WatchOptions::once());

    let heading_styles = use_reveal(2, RevealConfig::fade_up().stagger(200.0), heading_view.is_visible);
    let form_style = use_reveal(
        1,
        RevealConfig::fade_up().from(RevealStyle::fade_side(-50.0)),
        heading_view.is_visible,
    );
    let card_styles = use_reveal(
        CONTACT_INFO.len(),
        RevealConfig::fade_up().stagger(100.0),
        info_view.is_visible,
    );
    let heading_style = |i: usize| heading_styles.get(i).cloned().unwrap_or_default();

    let on_change = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let (name, value) = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                (input.name(), input.value())
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                (area.name(), area.value())
            } else {
                return;
            };
            let mut next = (*form).clone();
            if next.set(&name, value) {
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.to_json() {
                Ok(payload) => {
                    info!("Contact form submitted");
                    gloo_console::log!(payload);
                }
                Err(e) => warn!("Could not serialize contact form: {}", e),
            }
        })
    };

    html! {
        <section id="contact" ref={section_ref} class="contact-section">
            <div class="contact-container">
                <div class="contact-heading">
                    <h2 style={heading_style(0)}>{"Get in Touch"}</h2>
                    <p style={heading_style(1)}>
                        {"Have a project in mind? We'd love to hear from you. Send us a message and we'll respond as soon as possible."}
                    </p>
                </div>

                <div class="contact-map">
                    <MapEmbed />
                </div>

                <div class="contact-grid">
                    <div class="contact-form-card" style={form_style.into_iter().next().unwrap_or_default()}>
                        <h3>{"Send us a Message"}</h3>
                        <form onsubmit={on_submit}>
                            <div class="form-row">
                                <div>
                                    <label for="firstName">{"First Name"}</label>
                                    <input type="text" id="firstName" name="firstName"
                                        value={form.first_name.clone()} oninput={on_change.clone()} />
                                </div>
                                <div>
                                    <label for="lastName">{"Last Name"}</label>
                                    <input type="text" id="lastName" name="lastName"
                                        value={form.last_name.clone()} oninput={on_change.clone()} />
                                </div>
                            </div>
                            <label for="email">{"Email"}</label>
                            <input type="email" id="email" name="email"
                                value={form.email.clone()} oninput={on_change.clone()} />
                            <label for="subject">{"Subject"}</label>
                            <input type="text" id="subject" name="subject"
                                value={form.subject.clone()} oninput={on_change.clone()} />
                            <label for="message">{"Message"}</label>
                            <textarea id="message" name="message" rows="4"
                                value={form.message.clone()} oninput={on_change} />
                            <button type="submit" class="contact-submit">{"Send Message"}</button>
                        </form>
                    </div>

                    <div ref={info_ref} class="contact-info">
                        { for CONTACT_INFO.iter().zip(card_styles).map(|(item, style)| html! {
                            <div key={item.title} class="info-card" {style}>
                                <div class="info-icon">{item.icon}</div>
                                <div>
                                    <h4>{item.title}</h4>
                                    <p>{item.content}</p>
                                </div>
                            </div>
                        }) }
                        <div class="info-card social-card">
                            <h4>{"Follow Us"}</h4>
                            <div class="social-links">
                                <a href="#">{"f"}</a>
                                <a href="#">{"in"}</a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .contact-section {
                    padding: 6rem 1rem;
                    background: linear-gradient(to bottom, white, #f9fafb);
                }
                .contact-container {
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .contact-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .contact-heading h2 {
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 700;
                    color: #1B2431;
                    margin-bottom: 1rem;
                }
                .contact-heading p {
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .contact-map {
                    margin-bottom: 4rem;
                }
                .map-placeholder {
                    width: 100%;
                    height: 400px;
                    background: #f3f4f6;
                    border-radius: 16px;
                    animation: pulse 2s ease-in-out infinite;
                }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                .map-frame {
                    position: relative;
                    width: 100%;
                    height: 400px;
                }
                .map-frame iframe {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    border-radius: 16px;
                }
                .map-shade {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    border-radius: 16px;
                    background: linear-gradient(to top, rgba(0,0,0,0.2), transparent);
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 3rem;
                }
                .contact-form-card {
                    background: rgba(255,255,255,0.8);
                    backdrop-filter: blur(4px);
                    border-radius: 16px;
                    padding: 2rem;
                    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
                }
                .contact-form-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1.5rem;
                }
                .contact-form-card label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin: 1rem 0 0.5rem;
                }
                .contact-form-card input,
                .contact-form-card textarea {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    background: rgba(255,255,255,0.5);
                    box-sizing: border-box;
                    outline: none;
                    transition: box-shadow 0.3s ease;
                }
                .contact-form-card input:focus,
                .contact-form-card textarea:focus {
                    box-shadow: 0 0 0 2px #facc15;
                }
                .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-submit {
                    margin-top: 1.5rem;
                    width: 100%;
                    padding: 1rem;
                    background: #eab308;
                    color: white;
                    border: none;
                    border-radius: 8px;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .contact-submit:hover {
                    background: #facc15;
                }
                .contact-info {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .info-card {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                    background: rgba(255,255,255,0.8);
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 15px rgba(0,0,0,0.1);
                }
                .info-icon {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #fefce8;
                    border-radius: 8px;
                    font-size: 1.25rem;
                }
                .info-card h4 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    color: #1f2937;
                    margin-bottom: 0.25rem;
                }
                .info-card p {
                    color: #4b5563;
                }
                .social-card {
                    flex-direction: column;
                }
                .social-links {
                    display: flex;
                    gap: 1rem;
                }
                .social-links a {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #eab308;
                    color: white;
                    border-radius: 8px;
                    text-decoration: none;
                    font-weight: 700;
                }
                @media (max-width: 1024px) {
                    .contact-grid,
                    .form-row {
                        grid-template-columns: 1fr;
                    }
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
    fn fields_are_set_by_form_name() {
        let mut form = ContactForm::default();
        assert!(form.set("firstName", "Ada".into()));
        assert!(form.set("message", "Need a quote".into()));
        assert!(!form.set("phone", "555".into()));
        assert_eq!(form.first_name, "Ada");
        assert_eq!(form.message, "Need a quote");
    }

    #[test]
    fn payload_uses_form_field_names() {
        let mut form = ContactForm::default();
        form.set("lastName", "Lovelace".into());
        form.set("email", "ada@example.com".into());
        let json: serde_json::Value = serde_json::from_str(&form.to_json().unwrap()).unwrap();
        assert_eq!(json["lastName"], "Lovelace");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["firstName"], "");
        assert!(json.get("first_name").is_none());
    }
}
