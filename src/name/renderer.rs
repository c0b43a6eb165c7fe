//! Signature renderers: the compiler-provided text each type name is sliced out of.

use std::marker::PhantomData;
use std::sync::OnceLock;

use reflection_core::slicing::Anchors;

use super::anchors::calibrate;
use crate::errors::ReflectionError;

/// A strategy that renders a type into text embedding the type's fully qualified spelling.
pub trait SignatureRenderer {
    /// Short label used in logs and errors.
    const NAME: &'static str;

    /// Render `T`. The output must embed `core::any::type_name::<T>()` between renderer-specific boilerplate.
    fn render<T: ?Sized>() -> &'static str;

    /// Anchors discovered by rendering the calibration fixture; computed on first use and reused afterwards.
    fn anchors() -> Result<Anchors<'static>, ReflectionError>;
}

#[allow(dead_code)]
struct Probe<T: ?Sized>(PhantomData<T>);

/// Renders `Probe<T>` through `core::any::type_name`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeNameRenderer;

impl SignatureRenderer for TypeNameRenderer {
    const NAME: &'static str = "type_name";

    fn render<T: ?Sized>() -> &'static str {
        std::any::type_name::<Probe<T>>()
    }

    fn anchors() -> Result<Anchors<'static>, ReflectionError> {
        static ANCHORS: OnceLock<Result<Anchors<'static>, ReflectionError>> = OnceLock::new();
        ANCHORS.get_or_init(calibrate::<Self>).clone()
    }
}

fn probe<T: ?Sized>() {}

/// Renders the signature of the generic fn item `probe::<T>` through `core::any::type_name_of_val`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FnSignatureRenderer;

impl SignatureRenderer for FnSignatureRenderer {
    const NAME: &'static str = "fn_signature";

    fn render<T: ?Sized>() -> &'static str {
        std::any::type_name_of_val(&probe::<T>)
    }

    fn anchors() -> Result<Anchors<'static>, ReflectionError> {
        static ANCHORS: OnceLock<Result<Anchors<'static>, ReflectionError>> = OnceLock::new();
        ANCHORS.get_or_init(calibrate::<Self>).clone()
    }
}

/// Renderer used by [`type_name_of`](super::type_name_of) and friends; selected by the `fn-signature-names` feature.
#[cfg(not(feature = "fn-signature-names"))]
pub type DefaultRenderer = TypeNameRenderer;

/// Renderer used by [`type_name_of`](super::type_name_of) and friends; selected by the `fn-signature-names` feature.
#[cfg(feature = "fn-signature-names")]
pub type DefaultRenderer = FnSignatureRenderer;
