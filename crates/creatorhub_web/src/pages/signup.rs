use stylist::css;
use stylist::yew::Global;
use yew::{function_component, html, Html};
use yew_router::prelude::Link;

use crate::pages::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Password,
}

impl FieldKind {
    /// Value of the `type` attribute on the rendered `<input>`.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Password => "password",
        }
    }

    pub fn is_masked(self) -> bool {
        matches!(self, FieldKind::Password)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormField {
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

/// The form's inputs, top to bottom. Nothing reads their values.
pub const SIGN_UP_FIELDS: [FormField; 3] = [
    FormField {
        kind: FieldKind::Text,
        placeholder: "Full Name",
    },
    FormField {
        kind: FieldKind::Email,
        placeholder: "Email",
    },
    FormField {
        kind: FieldKind::Password,
        placeholder: "Password",
    },
];

#[function_component]
pub fn SignUp() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                .signup {
                    position: relative;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    width: 100%;
                    min-height: 100vh;
                    overflow: hidden;
                    color: white;
                    background: black;
                }

                .signup::before,
                .signup::after {
                    content: "";
                    position: absolute;
                    inset: 0;
                }

                .signup::before {
                    background: black;
                    opacity: 0.7;
                }

                .signup::after {
                    background: linear-gradient(to bottom right, #581c87, black, black);
                    opacity: 0.6;
                }

                .signup-card {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    max-width: 28rem;
                    margin: 0 1rem;
                    padding: 2.5rem;
                    border-radius: 1rem;
                    color: black;
                    background: white;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .signup-card h1 {
                    margin-bottom: 0.5rem;
                    font-size: 2.25rem;
                    font-weight: 800;
                    text-align: center;
                    color: transparent;
                    background: linear-gradient(to right, #9333ea, #db2777);
                    background-clip: text;
                    -webkit-background-clip: text;
                }

                .signup-subtext {
                    margin-bottom: 2rem;
                    text-align: center;
                    color: #2563eb;
                }

                .signup-fields {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .signup-fields input {
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                }

                .signup-fields input:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px #9333ea;
                }

                .signup-fields button {
                    padding: 1rem 0;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 700;
                    color: white;
                    background: linear-gradient(to right, #9333ea, #db2777);
                    transition: opacity 150ms;
                }

                .signup-fields button:hover {
                    opacity: 0.9;
                }

                .signup-footer {
                    margin-top: 1.5rem;
                    text-align: center;
                    color: #4b5563;
                }

                .signup-footer a {
                    font-weight: 600;
                    color: #9333ea;
                    text-decoration: none;
                }

                .signup-footer a:hover {
                    text-decoration: underline;
                }
            "#)} />
            <section class="signup">
                <div class="signup-card">
                    <h1>{"Create Account"}</h1>
                    <p class="signup-subtext">{"Join us today!"}</p>

                    <div class="signup-fields">
                        { for SIGN_UP_FIELDS.iter().map(|field| html! {
                            <input type={field.kind.input_type()} placeholder={field.placeholder} />
                        }) }
                        <button>{"Sign Up"}</button>
                    </div>

                    <p class="signup-footer">
                        {"Already have an account? "}
                        <Link<Route> to={Route::Home}>{"Log in"}</Link<Route>>
                    </p>
                </div>
            </section>
        </>
    }
}
