use leptos::{html, prelude::*};

use crate::behavior::{placeholder_data_uri, FallbackImage};

/// `<img>` that swaps to `fallback` once if `src` fails to load.
#[component]
pub fn FallbackImg(
    #[prop(into)] src: String,
    #[prop(into)] fallback: String,
    #[prop(into)] alt: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let image = RwSignal::new(FallbackImage::new(src, fallback));
    let node_ref = NodeRef::<html::Img>::new();

    let fail = move || {
        if image.try_update(FallbackImage::fail) == Some(true) {
            log::debug!("image failed to load, using fallback");
        }
    };

    // the load may already have failed before hydration attached `on:error`
    Effect::new(move |_| {
        let Some(el) = node_ref.get() else {
            return;
        };
        let broken = el.complete() && el.natural_width() == 0;
        if broken && !image.with_untracked(FallbackImage::is_fallback) {
            fail();
        }
    });

    view! {
        <img
            node_ref=node_ref
            src=move || image.with(|i| i.src().to_string())
            alt=alt
            class=class
            on:error=move |_| fail()
        />
    }
}

#[component]
pub fn Avatar(#[prop(into)] name: String, #[prop(into)] photo: String) -> impl IntoView {
    let placeholder = placeholder_data_uri(&name);
    view! {
        <FallbackImg
            src=photo
            fallback=placeholder
            alt=name
            class="w-44 h-44 md:w-56 md:h-56 rounded-full object-cover border-4 border-indigo-600 shadow-2xl"
        />
    }
}
