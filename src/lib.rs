//! Artisan storefront
//!
//! Shared logic behind the handmade-goods marketplace storefront. Product and
//! artisan pages embed staff-supplied video links through [`embeds`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub use media_embeds as embeds;
