//! Canonical text rendering of snapshots.
//!
//! Two snapshots describe the same edit iff their fingerprints are
//! byte-equal. Struct impls are generated by [`fingerprint_struct!`], which
//! destructures the struct exhaustively: a field added to a snapshot type
//! without being listed here fails to compile instead of silently dropping
//! out of the comparison. Enums render by variant name, never by ordinal.

use std::fmt::Write;

use shared::{
    CollarParams, CollarPreset, EnvironmentSettings, GripStyle, IndicatorShape, LightType,
    LightingMode, MaterialParams, ModelParams, PaintBrushSettings, PaintBrushType, PaintChannel,
    PartMaterial, PartMaterialOverrides, ScratchAbrasionType, ScratchSettings, ShadowLightMode,
    ShadowSettings, SurfaceDetailSettings,
};

/// Accumulates the canonical text
#[derive(Debug, Default)]
pub struct FingerprintWriter {
    out: String,
}

impl FingerprintWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a named aggregate
    pub fn begin(&mut self, type_name: &str) {
        self.out.push_str(type_name);
        self.out.push('{');
    }

    pub fn end(&mut self) {
        self.out.push('}');
    }

    /// Write `name=value;`
    pub fn field<T: Fingerprint + ?Sized>(&mut self, name: &str, value: &T) {
        self.out.push_str(name);
        self.out.push('=');
        value.write_fingerprint(self);
        self.out.push(';');
    }

    /// Append a token verbatim
    pub fn raw(&mut self, token: &str) {
        self.out.push_str(token);
    }

    fn display(&mut self, value: impl std::fmt::Debug) {
        // Writing into a String cannot fail
        let _ = write!(self.out, "{value:?}");
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Types that can be rendered into a canonical fingerprint
pub trait Fingerprint {
    fn write_fingerprint(&self, w: &mut FingerprintWriter);
}

/// Render a value to its full canonical text
pub fn fingerprint<T: Fingerprint + ?Sized>(value: &T) -> String {
    let mut w = FingerprintWriter::new();
    value.write_fingerprint(&mut w);
    w.finish()
}

/// Implement [`Fingerprint`] for a struct by listing every field in
/// declaration order. The listing must be exhaustive.
macro_rules! fingerprint_struct {
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::state::history::fingerprint::Fingerprint for $ty {
            fn write_fingerprint(
                &self,
                w: &mut $crate::state::history::fingerprint::FingerprintWriter,
            ) {
                let $ty { $($field),* } = self;
                w.begin(stringify!($ty));
                $( w.field(stringify!($field), $field); )*
                w.end();
            }
        }
    };
}
pub(crate) use fingerprint_struct;

/// Implement [`Fingerprint`] for enums exposing `as_str()`
macro_rules! fingerprint_named_enum {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Fingerprint for $ty {
                fn write_fingerprint(&self, w: &mut FingerprintWriter) {
                    w.raw(self.as_str());
                }
            }
        )*
    };
}

macro_rules! fingerprint_debug {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Fingerprint for $ty {
                fn write_fingerprint(&self, w: &mut FingerprintWriter) {
                    w.display(self);
                }
            }
        )*
    };
}

// `{:?}` on floats is the shortest text that round-trips exactly
fingerprint_debug!(f32, f64, u8, u32, u64, usize, bool);

impl Fingerprint for str {
    fn write_fingerprint(&self, w: &mut FingerprintWriter) {
        // Length prefix keeps separators inside names unambiguous
        w.display(self.len());
        w.raw(":");
        w.raw(self);
    }
}

impl Fingerprint for String {
    fn write_fingerprint(&self, w: &mut FingerprintWriter) {
        self.as_str().write_fingerprint(w);
    }
}

impl<T: Fingerprint> Fingerprint for [T] {
    fn write_fingerprint(&self, w: &mut FingerprintWriter) {
        w.raw("[");
        w.display(self.len());
        w.raw("|");
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                w.raw(",");
            }
            item.write_fingerprint(w);
        }
        w.raw("]");
    }
}

impl<T: Fingerprint> Fingerprint for Vec<T> {
    fn write_fingerprint(&self, w: &mut FingerprintWriter) {
        self.as_slice().write_fingerprint(w);
    }
}

impl<T: Fingerprint, const N: usize> Fingerprint for [T; N] {
    fn write_fingerprint(&self, w: &mut FingerprintWriter) {
        self.as_slice().write_fingerprint(w);
    }
}

impl<T: Fingerprint> Fingerprint for Option<T> {
    fn write_fingerprint(&self, w: &mut FingerprintWriter) {
        match self {
            Some(value) => {
                w.raw("some(");
                value.write_fingerprint(w);
                w.raw(")");
            }
            None => w.raw("none"),
        }
    }
}

fingerprint_named_enum!(
    LightType,
    LightingMode,
    ShadowLightMode,
    PaintBrushType,
    PaintChannel,
    ScratchAbrasionType,
    GripStyle,
    IndicatorShape,
    CollarPreset,
);

fingerprint_struct!(EnvironmentSettings {
    top_color,
    bottom_color,
    intensity,
    roughness_mix,
});

fingerprint_struct!(ShadowSettings {
    enabled,
    source_mode,
    strength,
    softness,
    distance,
    scale,
    quality,
    gray,
    diffuse_influence,
});

fingerprint_struct!(PaintBrushSettings {
    brush_type,
    channel,
    size,
    opacity,
    spread,
    darkness,
    paint_color,
});

fingerprint_struct!(ScratchSettings {
    abrasion_type,
    width,
    depth,
    drag_resistance,
    depth_ramp,
    exposed_color,
    exposed_metallic,
    exposed_roughness,
});

fingerprint_struct!(SurfaceDetailSettings {
    spiral_normal_enabled,
    spiral_normal_influence,
    spiral_normal_lod_fade_start,
    spiral_normal_lod_fade_end,
    spiral_roughness_lod_boost,
    micro_detail_enabled,
    micro_detail_scale,
    micro_detail_strength,
});

fingerprint_struct!(ModelParams {
    radius,
    height,
    bevel,
    bevel_curve,
    crown_profile,
    top_radius_scale,
    body_taper,
    body_bulge,
    radial_segments,
    grip_style,
    grip_start,
    grip_height,
    grip_density,
    grip_pitch,
    grip_depth,
    knurl_angle_degrees,
    spiral_ridge_height,
    spiral_ridge_width,
    spiral_turns,
    indicator_enabled,
    indicator_shape,
    indicator_width,
    indicator_length,
    indicator_position,
    indicator_relief,
});

fingerprint_struct!(PartMaterial {
    base_color,
    metallic,
    roughness,
});

fingerprint_struct!(PartMaterialOverrides { top, bevel, side });

fingerprint_struct!(MaterialParams {
    base_color,
    metallic,
    roughness,
    pearlescence,
    rust_amount,
    wear_amount,
    gunk_amount,
    radial_brush_strength,
    radial_brush_density,
    surface_character,
    part_overrides,
});

fingerprint_struct!(CollarParams {
    enabled,
    preset,
    inner_radius_ratio,
    gap_to_knob_ratio,
    elevation_ratio,
    overall_rotation_degrees,
    biting_angle_degrees,
    body_thickness_ratio,
    head_length_ratio,
    head_thickness_ratio,
    tail_taper,
    segment_count,
    base_color,
    metallic,
    roughness,
    pearlescence,
    rust_amount,
    wear_amount,
    gunk_amount,
    imported_mesh_path,
    imported_scale,
    imported_body_length_scale,
    imported_body_thickness_scale,
    imported_rotation_degrees,
    imported_mirror_x,
    imported_mirror_y,
    imported_mirror_z,
    imported_offset_x,
    imported_offset_y,
    imported_inflate,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_renders_by_name() {
        assert_eq!(fingerprint(&GripStyle::Fluted), "Fluted");
        assert_eq!(fingerprint(&Some(CollarPreset::ImportedMesh)), "some(ImportedMesh)");
    }

    #[test]
    fn test_struct_field_order() {
        let part = PartMaterial {
            base_color: [1.0, 0.5, 0.0],
            metallic: 1.0,
            roughness: 0.25,
        };
        assert_eq!(
            fingerprint(&part),
            "PartMaterial{base_color=[3|1.0,0.5,0.0];metallic=1.0;roughness=0.25;}"
        );
    }

    #[test]
    fn test_strings_are_length_prefixed() {
        assert_ne!(
            fingerprint(&vec!["a,b".to_string()]),
            fingerprint(&vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_equal_values_equal_fingerprints() {
        let a = ModelParams::default();
        let b = ModelParams::default();
        assert_eq!(fingerprint(&a), fingerprint(&b));

        let mut c = ModelParams::default();
        c.radius += 0.001;
        assert_ne!(fingerprint(&a), fingerprint(&c));
    }

    #[test]
    fn test_material_override_presence_changes_fingerprint() {
        let mut m = MaterialParams::default();
        let plain = fingerprint(&m);
        m.part_overrides = Some(PartMaterialOverrides::from_base(&m));
        assert_ne!(plain, fingerprint(&m));
    }
}
