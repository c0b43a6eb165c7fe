//! The calibration fixture and anchor discovery.

use reflection_core::slicing::Anchors;

use super::renderer::SignatureRenderer;
use crate::errors::ReflectionError;

/// Identifier of the calibration fixture. User types spelled the same way cannot be named reliably.
pub const FIXTURE_IDENT: &str = "ReflectionCalibrationFixture";

/// Rendered once per renderer to discover its anchors; never constructed.
#[allow(dead_code)]
pub(crate) struct ReflectionCalibrationFixture;

/// Render the fixture through `R` and split the output around the fixture's own spelling.
pub(super) fn calibrate<R: SignatureRenderer>() -> Result<Anchors<'static>, ReflectionError> {
    let rendered = R::render::<ReflectionCalibrationFixture>();
    let fixture = std::any::type_name::<ReflectionCalibrationFixture>();
    let anchors = Anchors::discover(rendered, fixture).ok_or(ReflectionError::CalibrationFailed {
        renderer: R::NAME,
        fixture,
        rendered,
    })?;
    tracing::debug!(
        renderer = R::NAME,
        begin = anchors.begin(),
        end = anchors.end(),
        "calibrated signature anchors"
    );
    Ok(anchors)
}

/// Whether any identifier in `path` is the fixture identifier.
pub(super) fn names_fixture(path: &str) -> bool {
    path.split(|c: char| !(c == '_' || c.is_alphanumeric()))
        .any(|segment| segment == FIXTURE_IDENT)
}
