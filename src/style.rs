//! Pure derivations from a [`DocumentState`](crate::model::DocumentState) to render-ready style
//! values. Nothing here fails or mutates: inputs are taken as already valid, and optional
//! elements that have nothing to show are `None` rather than empty placeholders.

pub mod background;
pub mod effects;
pub mod frame;
pub mod tree;

pub use background::{NoiseOverlay, PatternFill, noise, pattern};
pub use effects::{
    BorderStyle, BoxShadow, FilterChain, FilterTerm, ShadowLayer, TransformChain, TransformTerm,
    border, box_shadow, filter, transform,
};
pub use frame::{FrameChrome, FrameGeometry, PhoneChrome, TitleBar, frame_geometry};
pub use tree::{
    CanvasStyle, ImageNode, Reflection, TextBlock, VisualTree, Watermark, render_tree,
};

// CSS-valued styles serialize as the string a stylesheet would contain.
macro_rules! serialize_as_css {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.collect_str(self)
                }
            }
        )+
    };
}
pub(crate) use serialize_as_css;
