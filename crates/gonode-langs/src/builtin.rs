use std::sync::{Arc, LazyLock};

use crate::{Lang, LangInner};

macro_rules! define_langs {
    (
        $(
            $fn_name:ident => {
                feature: $feature:literal,
                ts_lang: $ts_lang:expr,
                extensions: [$($ext:literal),* $(,)?] $(,)?
            }
        ),* $(,)?
    ) => {
        $(
            #[cfg(feature = $feature)]
            pub fn $fn_name() -> Lang {
                static LANG: LazyLock<Lang> =
                    LazyLock::new(|| Arc::new(LangInner::new($ts_lang.into())));
                Arc::clone(&LANG)
            }
        )*

        /// Language for a file extension (without the dot), case-insensitive.
        pub fn from_ext(ext: &str) -> Option<Lang> {
            match ext.to_ascii_lowercase().as_str() {
                $(
                    #[cfg(feature = $feature)]
                    $($ext)|* => Some($fn_name()),
                )*
                _ => None,
            }
        }
    };
}

define_langs! {
    go => {
        feature: "lang-go",
        ts_lang: arborium_go::language(),
        extensions: ["go"],
    },
}
