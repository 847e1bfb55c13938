use std::future::Future;

use env_defs::{Named, ProviderError};
use log::info;

/// Return the listed resource called `name`, or create it when none matches.
///
/// `list` is called exactly once; `create` is called only when nothing
/// matched. There is no locking: two concurrent callers can both miss and
/// both create.
pub async fn find_or_create<T, L, LF, C, CF>(
    name: &str,
    list: L,
    create: C,
) -> Result<T, ProviderError>
where
    T: Named,
    L: FnOnce() -> LF,
    LF: Future<Output = Result<Vec<T>, ProviderError>>,
    C: FnOnce() -> CF,
    CF: Future<Output = Result<T, ProviderError>>,
{
    let existing = list().await?;

    if let Some(found) = existing.into_iter().find(|resource| resource.name() == name) {
        info!("Found existing resource named {}", name);
        return Ok(found);
    }

    info!("No resource named {}, creating it", name);
    create().await
}
