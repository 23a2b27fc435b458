use leptos::prelude::*;

#[component]
pub fn ArrowDownIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/arrow_down.svg" class=class/>
    }
}

#[component]
pub fn ConfigErrorIcon(#[prop(default = "h-20 w-20")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/errors/config.svg" class=class/>
    }
}

#[component]
pub fn LoadingIcon(#[prop(default = "h-7 w-7 my-5")] class: &'static str) -> impl IntoView {
    view! {
        <div class="w-full flex items-center justify-center">
            <img src="/svg/loading.svg" class=class/>
        </div>
    }
}

#[component]
pub fn RefreshIcon(#[prop(default = "h-5 w-5")] class: &'static str) -> impl IntoView {
    view! {
        <img src="/svg/refresh.svg" class=class/>
    }
}
