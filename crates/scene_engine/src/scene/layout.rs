//! The desk scene
//!
//! A desk with a coffee mug, keyboard, mouse and monitor in front of two
//! walls. Instructions are listed in draw order.

use crate::foundation::math::Vec3;
use crate::render::mesh::{CylinderParts, Shape};
use crate::scene::draw::DrawInstruction;
use crate::scene::transform::ObjectTransform;

/// Rows of keyboard keys
pub const KEY_ROWS: usize = 5;

/// Keys per keyboard row
pub const KEYS_PER_ROW: usize = 12;

const KEY_PITCH: f32 = 0.3;

fn at(scale: [f32; 3], position: [f32; 3]) -> ObjectTransform {
    ObjectTransform::scaled_at(Vec3::from(scale), Vec3::from(position))
}

/// Every draw of the desk scene, in order
pub fn desk_layout() -> Vec<DrawInstruction> {
    let mut scene = Vec::with_capacity(13 + KEY_ROWS * KEYS_PER_ROW);

    scene.push(
        DrawInstruction::new("ground plane", Shape::Plane, at([10.0, 10.0, 5.0], [0.0, 0.0, 0.0]))
            .textured("oak")
            .material("wood"),
    );

    // Mug: open-topped outer wall, bottomless coffee surface inside, torus handle
    scene.push(
        DrawInstruction::new(
            "mug body",
            Shape::Cylinder(CylinderParts::BOTTOM | CylinderParts::SIDES),
            at([0.8, 1.2, 0.8], [-4.0, -0.03, -0.5]),
        )
        .textured("mug")
        .material("clay"),
    );
    scene.push(
        DrawInstruction::new(
            "mug inner surface",
            Shape::Cylinder(CylinderParts::TOP | CylinderParts::SIDES),
            at([0.75, 1.15, 0.75], [-4.0, -0.04, -0.5]),
        )
        .textured("coffee")
        .material("glass"),
    );
    scene.push(
        DrawInstruction::new("mug handle", Shape::Torus, at([0.4, 0.4, 0.4], [-3.2, 0.6, -0.5]))
            .textured("mug")
            .material("clay"),
    );

    scene.push(
        DrawInstruction::new("keyboard base", Shape::Box, at([4.0, 0.2, 2.0], [0.0, 0.0, 2.0]))
            .textured("stainless")
            .material("metal"),
    );
    for row in 0..KEY_ROWS {
        for column in 0..KEYS_PER_ROW {
            let position = [
                -1.65 + column as f32 * KEY_PITCH,
                0.05,
                1.5 + row as f32 * KEY_PITCH,
            ];
            scene.push(
                DrawInstruction::new(
                    format!("key {}:{}", row, column),
                    Shape::Box,
                    at([0.25, 0.25, 0.25], position).with_rotation(0.0, 1.5, 0.0),
                )
                .textured("blktx")
                .material("lightplastic"),
            );
        }
    }

    scene.push(
        DrawInstruction::new(
            "mouse body",
            Shape::Sphere,
            at([0.5, 0.2, 0.8], [4.0, 0.2, 2.5]).with_rotation(0.0, 15.0, 0.0),
        )
        .textured("blktx")
        .material("lightplastic"),
    );
    scene.push(
        DrawInstruction::new(
            "mouse wheel",
            Shape::cylinder(),
            at([0.1, 0.1, 0.15], [3.9, 0.31, 2.0]).with_rotation(0.0, 15.0, 90.0),
        )
        .textured("rubber")
        .material("lightplastic"),
    );

    scene.push(
        DrawInstruction::new("back wall", Shape::Box, at([40.0, 30.0, 0.2], [0.0, 2.5, -6.0]))
            .colored(0.8, 0.8, 0.8, 1.0)
            .textured("drywall")
            .material("cement"),
    );
    scene.push(
        DrawInstruction::new(
            "side wall",
            Shape::Box,
            at([40.0, 30.0, 0.2], [20.0, 2.5, 10.0]).with_rotation(0.0, 90.0, 0.0),
        )
        .colored(0.8, 0.8, 0.8, 1.0)
        .textured("drywall")
        .material("cement"),
    );

    scene.push(
        DrawInstruction::new("monitor body", Shape::Box, at([9.0, 4.5, 0.3], [0.0, 5.0, -3.5]))
            .textured("blktx")
            .material("plastic"),
    );
    scene.push(
        DrawInstruction::new("monitor screen", Shape::Box, at([8.8, 4.3, 0.3], [0.0, 5.0, -3.48]))
            .textured("Kali")
            .material("glass"),
    );
    scene.push(
        DrawInstruction::new("monitor pole", Shape::cylinder(), at([0.3, 4.0, 0.3], [0.0, 0.2, -3.7]))
            .textured("stainless")
            .material("metal"),
    );
    scene.push(
        DrawInstruction::new("monitor stand", Shape::Box, at([4.0, 0.3, 2.0], [0.0, 0.2, -3.5]))
            .textured("stainless")
            .material("metal"),
    );

    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_draw_count() {
        let scene = desk_layout();
        assert_eq!(scene.len(), 13 + KEY_ROWS * KEYS_PER_ROW);
    }

    #[test]
    fn test_fixed_objects_match_desk_values() {
        let open_top = Shape::Cylinder(CylinderParts::BOTTOM | CylinderParts::SIDES);
        let bottomless = Shape::Cylinder(CylinderParts::TOP | CylinderParts::SIDES);
        #[rustfmt::skip]
        let expected: [(&str, Shape, [f32; 3], [f32; 3], [f32; 3], &str, &str); 13] = [
            ("ground plane", Shape::Plane, [10.0, 10.0, 5.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0], "oak", "wood"),
            ("mug body", open_top, [0.8, 1.2, 0.8], [0.0, 0.0, 0.0], [-4.0, -0.03, -0.5], "mug", "clay"),
            ("mug inner surface", bottomless, [0.75, 1.15, 0.75], [0.0, 0.0, 0.0], [-4.0, -0.04, -0.5], "coffee", "glass"),
            ("mug handle", Shape::Torus, [0.4, 0.4, 0.4], [0.0, 0.0, 0.0], [-3.2, 0.6, -0.5], "mug", "clay"),
            ("keyboard base", Shape::Box, [4.0, 0.2, 2.0], [0.0, 0.0, 0.0], [0.0, 0.0, 2.0], "stainless", "metal"),
            ("mouse body", Shape::Sphere, [0.5, 0.2, 0.8], [0.0, 15.0, 0.0], [4.0, 0.2, 2.5], "blktx", "lightplastic"),
            ("mouse wheel", Shape::cylinder(), [0.1, 0.1, 0.15], [0.0, 15.0, 90.0], [3.9, 0.31, 2.0], "rubber", "lightplastic"),
            ("back wall", Shape::Box, [40.0, 30.0, 0.2], [0.0, 0.0, 0.0], [0.0, 2.5, -6.0], "drywall", "cement"),
            ("side wall", Shape::Box, [40.0, 30.0, 0.2], [0.0, 90.0, 0.0], [20.0, 2.5, 10.0], "drywall", "cement"),
            ("monitor body", Shape::Box, [9.0, 4.5, 0.3], [0.0, 0.0, 0.0], [0.0, 5.0, -3.5], "blktx", "plastic"),
            ("monitor screen", Shape::Box, [8.8, 4.3, 0.3], [0.0, 0.0, 0.0], [0.0, 5.0, -3.48], "Kali", "glass"),
            ("monitor pole", Shape::cylinder(), [0.3, 4.0, 0.3], [0.0, 0.0, 0.0], [0.0, 0.2, -3.7], "stainless", "metal"),
            ("monitor stand", Shape::Box, [4.0, 0.3, 2.0], [0.0, 0.0, 0.0], [0.0, 0.2, -3.5], "stainless", "metal"),
        ];

        let fixed: Vec<_> = desk_layout()
            .into_iter()
            .filter(|d| !d.label.starts_with("key "))
            .collect();
        assert_eq!(fixed.len(), expected.len());

        for (draw, (label, shape, scale, rotation, position, texture, material)) in fixed.iter().zip(expected) {
            assert_eq!(draw.label, label);
            assert_eq!(draw.shape, shape, "{}", label);
            assert_relative_eq!(draw.transform.scale, Vec3::from(scale), epsilon = 1e-6);
            assert_relative_eq!(draw.transform.rotation_degrees, Vec3::from(rotation), epsilon = 1e-6);
            assert_relative_eq!(draw.transform.position, Vec3::from(position), epsilon = 1e-6);
            assert_eq!(draw.texture.as_deref(), Some(texture), "{}", label);
            assert_eq!(draw.material.as_deref(), Some(material), "{}", label);
            assert_eq!(draw.uv_scale, crate::foundation::math::Vec2::new(1.0, 1.0), "{}", label);
        }
    }

    #[test]
    fn test_keys_form_a_grid() {
        let scene = desk_layout();
        let keys: Vec<_> = scene.iter().filter(|d| d.label.starts_with("key ")).collect();
        assert_eq!(keys.len(), 60);

        let last = keys[keys.len() - 1];
        assert_relative_eq!(last.transform.position.x, -1.65 + 11.0 * 0.3, epsilon = 1e-5);
        assert_relative_eq!(last.transform.position.z, 1.5 + 4.0 * 0.3, epsilon = 1e-5);
        assert!(keys.iter().all(|k| k.transform.rotation_degrees.y == 1.5));
    }

    #[test]
    fn test_mug_cylinders_leave_the_right_caps_open() {
        let scene = desk_layout();
        let body = scene.iter().find(|d| d.label == "mug body").unwrap();
        let inner = scene.iter().find(|d| d.label == "mug inner surface").unwrap();

        assert!(!body.shape.parts().contains(CylinderParts::TOP));
        assert!(!inner.shape.parts().contains(CylinderParts::BOTTOM));
    }

    #[test]
    fn test_only_walls_carry_a_flat_color() {
        let scene = desk_layout();
        let colored: Vec<&str> = scene
            .iter()
            .filter(|d| d.color.is_some())
            .map(|d| d.label.as_str())
            .collect();
        assert_eq!(colored, ["back wall", "side wall"]);
    }
}
