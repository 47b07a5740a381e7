//! Error boundary components for rendering failures.

use dioxus::prelude::*;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |_err: ErrorContext| {
                rsx! {
                    div {
                        style: "
                            display: flex;
                            flex-direction: column;
                            gap: 16px;
                            max-width: 720px;
                            margin: 96px auto;
                            padding: 24px;
                        ",
                        h1 {
                            style: "font-size: 36px; font-weight: 700; color: #111827;",
                            "Something went wrong"
                        }
                        p {
                            style: "font-size: 14px; color: #6B7280;",
                            "Boundary: {boundary_name}"
                        }
                        a {
                            href: "/",
                            style: "font-size: 14px; font-weight: 500; color: #4F46E5;",
                            "Back to the shop"
                        }
                        pre {
                            style: "font-size: 12px; color: #374151; background: #F3F4F6; padding: 12px; border-radius: 6px; text-wrap: auto;",
                            "{_err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |_err: ErrorContext| {
                let error_txt = match _err.error() {
                    Some(err) => format!("{:#?}", err.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            class: "x-text-button",
                            onclick: move |_| {
                                _err.clear_errors();
                            },
                            "Try again"
                        }
                    }
                }
            },
            {children}
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 8px;
                padding: 24px;
                grid-column: 1 / -1;
            ",
            p {
                style: "font-size: 14px; font-weight: 500; color: #111827;",
                "This section could not be displayed."
            }
            pre {
                style: "font-size: 12px; color: #6B7280; max-width: 500px; max-height: 300px; overflow-y: auto; text-wrap: auto;",
                "{error_txt}"
            }
            {children}
        }
    }
}
