//! Folding an ordered component list into one matrix.

use css_values::StyleValue;

use crate::component::TransformComponent;
use crate::matrix::TransformMatrix;

/// The left-to-right product of each component's matrix:
/// `m1.multiply(m2).multiply(m3)...`. Returns `None` for an empty list.
pub fn compose_matrix<C: TransformComponent>(components: &[C]) -> Option<TransformMatrix> {
    let (first, rest) = components.split_first()?;
    Some(
        rest.iter()
            .fold(first.matrix(), |running, next| running.multiply(&next.matrix())),
    )
}

/// True iff every component is individually planar.
///
/// Read from each component's own flag rather than from the composed matrix.
pub fn all_planar<C: TransformComponent>(components: &[C]) -> bool {
    components.iter().all(TransformComponent::is_planar)
}

/// Each component's canonical text, joined by single spaces.
pub fn join_css<C: StyleValue>(components: &[C]) -> String {
    components
        .iter()
        .map(StyleValue::css_string)
        .collect::<Vec<_>>()
        .join(" ")
}
