use std::future::Future;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// State of one fetch-on-mount request plus a callback to run it again
pub struct UseResourceHandle<T: 'static> {
    pub data: UseStateHandle<Option<T>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub reload: Callback<()>,
}

/// Fetch once on mount; `reload` refetches after a mutation.
///
/// The fetch closure from the first render is the one kept, so pages that
/// depend on an id are keyed by it and remount when it changes.
#[hook]
pub fn use_resource<T, F, Fut>(fetch: F) -> UseResourceHandle<T>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| None::<T>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    let reload = {
        let data = data.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_callback((), move |_: (), _| {
            let data = data.clone();
            let loading = loading.clone();
            let error = error.clone();
            let request = fetch();

            spawn_local(async move {
                loading.set(true);

                match request.await {
                    Ok(value) => {
                        data.set(Some(value));
                        error.set(None);
                    }
                    Err(e) => {
                        gloo::console::error!("Request failed:", e.clone());
                        error.set(Some(e));
                    }
                }

                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    UseResourceHandle {
        data,
        loading,
        error,
        reload,
    }
}
