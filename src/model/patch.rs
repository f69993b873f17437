use serde::{Deserialize, Serialize};

use crate::foundation::color::Color;
use crate::model::{
    AspectRatio, Background, BgPattern, DocumentState, Frame, ImageRef, TitleFont, TitlePosition,
};

// Declares `DocumentPatch` with one optional slot per `DocumentState` field, a chaining setter per
// slot, and the merge that copies every present slot over a snapshot.
macro_rules! document_patch {
    ($( $(#[$meta:meta])* $field:ident : $ty:ty ),* $(,)?) => {
        /// A partial document: every field optional, absent fields leave the snapshot untouched.
        #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct DocumentPatch {
            $(
                $(#[$meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl DocumentPatch {
            $(
                #[must_use]
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*

            /// Number of fields this patch sets.
            pub fn len(&self) -> usize {
                [$( self.$field.is_some() ),*]
                    .into_iter()
                    .filter(|set| *set)
                    .count()
            }

            pub(crate) fn merge_into(&self, state: &mut DocumentState) {
                $(
                    if let Some(value) = &self.$field {
                        state.$field = value.clone();
                    }
                )*
            }
        }
    };
}

document_patch! {
    #[serde(with = "double_option")]
    image: Option<ImageRef>,
    file_name: String,
    background: Background,
    custom_bg_color1: Color,
    custom_bg_color2: Color,
    bg_angle: f64,
    bg_pattern: BgPattern,
    bg_pattern_opacity: f64,
    bg_noise: u32,
    padding: u32,
    border_radius: u32,
    aspect_ratio: AspectRatio,
    shadow: u32,
    shadow_color: Color,
    frame: Frame,
    tilt_x: f64,
    tilt_y: f64,
    scale: f64,
    rotation: f64,
    reflection: bool,
    brightness: u32,
    contrast: u32,
    saturation: u32,
    blur: u32,
    border_width: u32,
    border_color: Color,
    title_text: String,
    title_size: u32,
    title_color: Color,
    title_font: TitleFont,
    title_position: TitlePosition,
    subtitle_text: String,
    subtitle_size: u32,
    subtitle_color: Color,
    watermark: bool,
    is_pro: bool,
}

impl DocumentPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// `image: null` in JSON clears the image; a missing key leaves it alone.
mod double_option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S, T>(
        value: &Option<Option<T>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(inner) => inner.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/patch.rs"]
mod tests;
