use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::behavior::{Lightbox, GENERIC_THUMBNAIL};
use crate::content::GalleryImage;

use super::avatar::FallbackImg;

#[component]
pub fn Gallery(images: Vec<GalleryImage>) -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::new(images.len()));
    let images = StoredValue::new(images);

    let _ = use_event_listener(use_document(), ev::keydown, move |e| {
        if e.key() == "Escape" && lightbox.with_untracked(Lightbox::is_open) {
            lightbox.update(Lightbox::clear);
        }
    });

    let thumbnails = images.with_value(|imgs| {
        imgs.iter()
            .cloned()
            .enumerate()
            .map(|(i, GalleryImage { src, label })| {
                let open_label = format!("Open {label}");
                view! {
                    <button
                        class="block"
                        aria-label=open_label
                        on:click=move |_| lightbox.update(|lb| lb.select(i))
                    >
                        <FallbackImg
                            src=src
                            fallback=GENERIC_THUMBNAIL
                            alt=label
                            class="w-full h-40 object-cover rounded-lg cursor-pointer shadow-lg"
                        />
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <section id="gallery" class="mb-8">
            <h3 class="text-2xl text-indigo-500 dark:text-indigo-300 font-semibold mb-4">
                "Gallery"
            </h3>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">{thumbnails}</div>
            {move || {
                lightbox
                    .with(Lightbox::selected)
                    .and_then(|i| images.with_value(|imgs| imgs.get(i).cloned()))
                    .map(|GalleryImage { src, label }| {
                        let dialog_label = label.clone();
                        view! {
                            <div
                                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 animate-fade"
                                role="dialog"
                                aria-modal="true"
                                aria-label=dialog_label
                                on:click=move |_| lightbox.update(Lightbox::clear)
                            >
                                <button
                                    class="absolute top-4 right-6 text-3xl text-white"
                                    aria-label="Close"
                                    on:click=move |_| lightbox.update(Lightbox::clear)
                                >
                                    "✕"
                                </button>
                                <img
                                    src=src
                                    alt=label
                                    class="max-w-4xl max-h-[80vh] rounded-xl shadow-2xl animate-rise"
                                    on:click=|e| e.stop_propagation()
                                />
                            </div>
                        }
                    })
            }}
        </section>
    }
}
