//! Relation resolution
//!
//! A relation arrives either loaded (slot filled) or as a bare id. Resolving
//! it fills the slot from the store and leaves it filled, so later reads of
//! the same relation within the call see the loaded entity.

use async_trait::async_trait;

use crate::context::Context;
use crate::data::{
    Account, Application, Emoji, EmojiCategory, MediaAttachment, Status, Store, StoreResult, Tag,
};
use crate::error::{ConvertError, Result, StoreError};
use crate::metrics::STORE_LOOKUPS_TOTAL;

/// An entity that can be looked up by id
#[async_trait]
pub(crate) trait Fetch: Sized + Send {
    /// Name used in error messages and metric labels
    const ENTITY: &'static str;

    async fn fetch(store: &dyn Store, ctx: &Context, id: &str) -> StoreResult<Self>;
}

macro_rules! impl_fetch {
    ($ty:ty, $entity:literal, $method:ident) => {
        #[async_trait]
        impl Fetch for $ty {
            const ENTITY: &'static str = $entity;

            async fn fetch(store: &dyn Store, ctx: &Context, id: &str) -> StoreResult<Self> {
                store.$method(ctx, id).await
            }
        }
    };
}

impl_fetch!(Account, "account", get_account);
impl_fetch!(Status, "status", get_status);
impl_fetch!(MediaAttachment, "attachment", get_attachment);
impl_fetch!(Emoji, "emoji", get_emoji);
impl_fetch!(EmojiCategory, "emoji category", get_emoji_category);
impl_fetch!(Tag, "tag", get_tag);
impl_fetch!(Application, "application", get_application);

/// Look up one entity, bounded by the context
pub(crate) async fn fetch<T: Fetch>(store: &dyn Store, ctx: &Context, id: &str) -> StoreResult<T> {
    STORE_LOOKUPS_TOTAL.with_label_values(&[T::ENTITY]).inc();
    ctx.guard(T::fetch(store, ctx, id)).await
}

/// Return the loaded relation, fetching it into `slot` first if empty
pub(crate) async fn resolve<'a, T: Fetch>(
    store: &dyn Store,
    ctx: &Context,
    slot: &'a mut Option<Box<T>>,
    id: &str,
) -> Result<&'a mut T> {
    if slot.is_none() {
        let entity = fetch::<T>(store, ctx, id)
            .await
            .map_err(|e| ConvertError::lookup(T::ENTITY, id, e))?;
        *slot = Some(Box::new(entity));
    }

    slot.as_deref_mut()
        .ok_or_else(|| ConvertError::lookup(T::ENTITY, id, StoreError::NotFound))
}
