use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaRocket, Icon};

use crate::client::component::{GlassCard, Page};
use crate::client::constant::SITE_NAME;
use crate::model::host::HostDto;
use crate::model::panel::ProvisionResultDto;

#[component]
pub fn Home() -> Element {
    let token = use_signal(String::new);
    let username = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let host_id = use_signal(String::new);
    let ram = use_signal(|| "2048".to_string());
    let cpu = use_signal(|| "100".to_string());
    let disk = use_signal(|| "10240".to_string());

    let hosts = use_signal(Vec::<HostDto>::new);
    let result = use_signal(|| Option::<ProvisionResultDto>::None);
    let error = use_signal(|| Option::<String>::None);
    let is_submitting = use_signal(|| false);

    rsx!(
        Title { "Order | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 items-center",
            GlassCard {
                class: "p-8 text-center max-w-xl w-full",
                h1 {
                    class: "text-3xl font-bold mb-2",
                    "Your game server, ready in seconds"
                }
                p {
                    "Pick a host, choose your resources, and we provision a "
                    "control panel account for you."
                }
            }
            OrderForm {
                token,
                username,
                email,
                password,
                host_id,
                ram,
                cpu,
                disk,
                hosts,
                result,
                error,
                is_submitting,
            }
            if let Some(message) = error() {
                GlassCard {
                    class: "p-4 max-w-xl w-full order-error",
                    delay: 0.0,
                    p { "{message}" }
                }
            }
            if let Some(outcome) = result() {
                OrderResult { outcome }
            }
        }
    )
}

#[component]
fn OrderForm(
    token: Signal<String>,
    username: Signal<String>,
    email: Signal<String>,
    password: Signal<String>,
    host_id: Signal<String>,
    ram: Signal<String>,
    cpu: Signal<String>,
    disk: Signal<String>,
    hosts: Signal<Vec<HostDto>>,
    result: Signal<Option<ProvisionResultDto>>,
    error: Signal<Option<String>>,
    is_submitting: Signal<bool>,
) -> Element {
    rsx!(
        GlassCard {
            class: "p-6 max-w-xl w-full",
            hover: true,
            delay: 0.1,
            div {
                class: "flex flex-col gap-4",
                LabeledInput {
                    label: "Access token",
                    input_type: "password",
                    placeholder: "Paste your account token...",
                    value: token,
                    disabled: is_submitting(),
                }
                div {
                    class: "flex flex-col gap-2",
                    label {
                        class: "label",
                        span { class: "label-text", "Host" }
                    }
                    div {
                        class: "flex gap-2",
                        select {
                            class: "select select-bordered w-full",
                            value: "{host_id}",
                            disabled: is_submitting(),
                            onchange: move |e| host_id.set(e.value()),
                            option {
                                value: "",
                                disabled: true,
                                selected: host_id().is_empty(),
                                "Select a host..."
                            }
                            for host in hosts() {
                                option {
                                    key: "{host.id}",
                                    value: "{host.id}",
                                    "{host.name}"
                                }
                            }
                        }
                        button {
                            class: "btn btn-outline",
                            disabled: is_submitting(),
                            onclick: move |_| load_hosts(token, hosts, error),
                            "Load hosts"
                        }
                    }
                }
                LabeledInput {
                    label: "Username",
                    input_type: "text",
                    placeholder: "Enter a panel username...",
                    value: username,
                    disabled: is_submitting(),
                }
                LabeledInput {
                    label: "Email",
                    input_type: "email",
                    placeholder: "Enter your email...",
                    value: email,
                    disabled: is_submitting(),
                }
                LabeledInput {
                    label: "Password",
                    input_type: "password",
                    placeholder: "Choose a panel password...",
                    value: password,
                    disabled: is_submitting(),
                }
                div {
                    class: "grid grid-cols-3 gap-2",
                    LabeledInput {
                        label: "RAM (MB)",
                        input_type: "number",
                        placeholder: "2048",
                        value: ram,
                        disabled: is_submitting(),
                    }
                    LabeledInput {
                        label: "CPU (%)",
                        input_type: "number",
                        placeholder: "100",
                        value: cpu,
                        disabled: is_submitting(),
                    }
                    LabeledInput {
                        label: "Disk (MB)",
                        input_type: "number",
                        placeholder: "10240",
                        value: disk,
                        disabled: is_submitting(),
                    }
                }
                button {
                    class: "btn btn-primary flex gap-2 items-center justify-center",
                    disabled: is_submitting(),
                    onclick: move |_| {
                        submit_order(
                            token, username, email, password, host_id, ram, cpu, disk,
                            result, error, is_submitting,
                        );
                    },
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaRocket
                    }
                    if is_submitting() {
                        "Provisioning..."
                    } else {
                        "Create panel"
                    }
                }
            }
        }
    )
}

#[component]
fn LabeledInput(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    mut value: Signal<String>,
    disabled: bool,
) -> Element {
    rsx!(
        div {
            class: "flex flex-col gap-2",
            label {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                r#type: input_type,
                class: "input input-bordered w-full",
                placeholder: placeholder,
                value: "{value}",
                disabled: disabled,
                oninput: move |e| value.set(e.value())
            }
        }
    )
}

#[component]
fn OrderResult(outcome: ProvisionResultDto) -> Element {
    rsx!(
        GlassCard {
            class: "p-6 max-w-xl w-full",
            delay: 0.0,
            h2 {
                class: "text-xl font-bold mb-2",
                "{outcome.message}"
            }
            p {
                "Log in at "
                a {
                    class: "link",
                    href: "{outcome.panel.login_url}",
                    "{outcome.panel.login_url}"
                }
                " with the credentials you chose."
            }
            if outcome.remote_server_id.is_none() {
                p {
                    class: "mt-2",
                    "Your server is still being set up; it will appear on the panel shortly."
                }
            }
        }
    )
}

/// Fetches the selectable hosts with the entered token.
///
/// Only does work in the browser; on the server this renders as a plain
/// button with no behavior.
fn load_hosts(
    token: Signal<String>,
    hosts: Signal<Vec<HostDto>>,
    error: Signal<Option<String>>,
) {
    #[cfg(feature = "web")]
    {
        let token = token();
        spawn(async move {
            let mut hosts = hosts;
            let mut error = error;
            match crate::client::api::host::get_hosts(&token).await {
                Ok(list) => {
                    error.set(None);
                    hosts.set(list);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = (token, hosts, error);
}

/// Validates the form and fires the provisioning request.
///
/// Only does work in the browser; on the server this renders as a plain
/// button with no behavior.
#[allow(clippy::too_many_arguments)]
fn submit_order(
    token: Signal<String>,
    username: Signal<String>,
    email: Signal<String>,
    password: Signal<String>,
    host_id: Signal<String>,
    ram: Signal<String>,
    cpu: Signal<String>,
    disk: Signal<String>,
    result: Signal<Option<ProvisionResultDto>>,
    error: Signal<Option<String>>,
    is_submitting: Signal<bool>,
) {
    #[cfg(feature = "web")]
    {
        use uuid::Uuid;

        use crate::model::panel::CreatePanelDto;

        let mut error = error;
        let mut is_submitting = is_submitting;

        let Ok(server_id) = Uuid::parse_str(&host_id()) else {
            error.set(Some("Please select a host first.".to_string()));
            return;
        };

        let payload = CreatePanelDto {
            username: username(),
            email: email(),
            password: password(),
            server_id,
            ram: ram().parse().unwrap_or(2048),
            cpu: cpu().parse().unwrap_or(100),
            disk: disk().parse().unwrap_or(10240),
        };
        let token = token();

        is_submitting.set(true);
        spawn(async move {
            let mut result = result;
            let mut error = error;
            let mut is_submitting = is_submitting;
            match crate::client::api::panel::create_panel(&token, &payload).await {
                Ok(outcome) => {
                    error.set(None);
                    result.set(Some(outcome));
                }
                Err(e) => {
                    result.set(None);
                    error.set(Some(e.to_string()));
                }
            }
            is_submitting.set(false);
        });
    }

    #[cfg(not(feature = "web"))]
    let _ = (
        token,
        username,
        email,
        password,
        host_id,
        ram,
        cpu,
        disk,
        result,
        error,
        is_submitting,
    );
}
