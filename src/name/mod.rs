//! Recover source-level type names from the compiler's rendering of a signature.
//!
//! Rust exposes type names only as rendered text (`core::any::type_name`, or the name of a monomorphized generic fn
//! item). The text around the embedded type is renderer-specific boilerplate, so each [`SignatureRenderer`] is
//! calibrated once: it renders a known fixture, finds the fixture's own spelling inside the output, and keeps the text
//! before and after it as anchors. Every later extraction renders the requested type through the same renderer and
//! slices it out between those anchors.
//!
//! Member and enumerator identifiers never go through this path: `#[derive(Reflect)]` captures them from the
//! definition's tokens as `&'static str` constants.

mod anchors;
mod renderer;

use std::borrow::Cow;

use reflection_core::paths::shorten_type_path;

use crate::errors::ReflectionError;

pub use anchors::FIXTURE_IDENT;
pub use renderer::{DefaultRenderer, FnSignatureRenderer, SignatureRenderer, TypeNameRenderer};

/// Fully qualified name of `T`, sliced out of renderer `R`'s output.
///
/// ## Errors
/// - [`ReflectionError::CalibrationFailed`] if `R` could not be calibrated.
/// - [`ReflectionError::UnrecognizedSignature`] if `R`'s output for `T` does not carry the calibrated anchors.
/// - [`ReflectionError::AnchorCollision`] if `T`'s path names the calibration fixture identifier.
pub fn extract_with<R: SignatureRenderer, T: ?Sized>() -> Result<&'static str, ReflectionError> {
    let anchors = R::anchors()?;
    let rendered = R::render::<T>();
    let path = anchors
        .slice(rendered)
        .ok_or(ReflectionError::UnrecognizedSignature { rendered })?;
    if anchors::names_fixture(path) {
        return Err(ReflectionError::AnchorCollision {
            rendered: path,
            fixture: FIXTURE_IDENT,
        });
    }
    Ok(path)
}

/// Fully qualified name of `T` using the build's default renderer.
pub fn full_type_name_of<T: ?Sized>() -> Result<&'static str, ReflectionError> {
    extract_with::<DefaultRenderer, T>()
}

/// Source-level name of `T` (every path reduced to its last segment), e.g. `Vec<Person>`.
pub fn try_type_name_of<T: ?Sized>() -> Result<Cow<'static, str>, ReflectionError> {
    full_type_name_of::<T>().map(shorten_type_path)
}

/// Source-level name of `T`.
///
/// Falls back to shortening `core::any::type_name::<T>()` directly if the renderer output cannot be sliced; the
/// failure is logged at `warn` level.
pub fn type_name_of<T: ?Sized>() -> Cow<'static, str> {
    try_type_name_of::<T>().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "falling back to unsliced type name");
        shorten_type_path(std::any::type_name::<T>())
    })
}
