//! Primitive mesh interface
//!
//! Tessellation belongs to the host's shape-mesh utility. The scene only
//! asks it to load each primitive kind once and to draw a primitive after
//! the per-object uniforms are set.

use std::fmt;

use bitflags::bitflags;

use crate::render::RenderResult;

bitflags! {
    /// Parts of a cylinder (or tapered cylinder) to draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CylinderParts: u8 {
        /// Top cap
        const TOP = 0b001;
        /// Bottom cap
        const BOTTOM = 0b010;
        /// Side wall
        const SIDES = 0b100;
    }
}

impl Default for CylinderParts {
    fn default() -> Self {
        Self::all()
    }
}

/// Kind of primitive mesh, used when loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Unit plane in XZ
    Plane,
    /// Unit box
    Box,
    /// Unit sphere
    Sphere,
    /// Torus; tube thickness comes from [`MeshParams`]
    Torus,
    /// Unit cylinder standing on the origin
    Cylinder,
    /// Cylinder narrowing towards the top
    TaperedCylinder,
}

impl ShapeKind {
    /// All primitive kinds, in the order the scene loads them
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Plane,
        ShapeKind::Cylinder,
        ShapeKind::Torus,
        ShapeKind::Box,
        ShapeKind::Sphere,
        ShapeKind::TaperedCylinder,
    ];
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShapeKind::Plane => "plane",
            ShapeKind::Box => "box",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Torus => "torus",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::TaperedCylinder => "tapered cylinder",
        };
        f.write_str(name)
    }
}

/// A primitive as drawn, with its part selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Plane
    Plane,
    /// Box
    Box,
    /// Sphere
    Sphere,
    /// Torus
    Torus,
    /// Cylinder with the selected parts
    Cylinder(CylinderParts),
    /// Tapered cylinder with the selected parts
    TaperedCylinder(CylinderParts),
}

impl Shape {
    /// Full cylinder with both caps
    pub fn cylinder() -> Self {
        Shape::Cylinder(CylinderParts::all())
    }

    /// The mesh kind that must be loaded to draw this shape
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Plane => ShapeKind::Plane,
            Shape::Box => ShapeKind::Box,
            Shape::Sphere => ShapeKind::Sphere,
            Shape::Torus => ShapeKind::Torus,
            Shape::Cylinder(_) => ShapeKind::Cylinder,
            Shape::TaperedCylinder(_) => ShapeKind::TaperedCylinder,
        }
    }

    /// Part selection for cylinders; other shapes are always drawn whole
    pub fn parts(&self) -> CylinderParts {
        match self {
            Shape::Cylinder(parts) | Shape::TaperedCylinder(parts) => *parts,
            _ => CylinderParts::all(),
        }
    }
}

/// Load-time parameters for primitive meshes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams {
    /// Tube thickness of the torus
    pub torus_thickness: f32,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            torus_thickness: 0.2,
        }
    }
}

/// Host-provided primitive mesh utility
pub trait ShapeMeshes {
    /// Generate and upload the mesh for `kind`
    fn load_mesh(&mut self, kind: ShapeKind, params: &MeshParams) -> RenderResult<()>;

    /// Issue the draw call for `shape` with whatever uniforms are current
    fn draw_mesh(&mut self, shape: Shape) -> RenderResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parts_are_complete() {
        assert_eq!(CylinderParts::default(), CylinderParts::TOP | CylinderParts::BOTTOM | CylinderParts::SIDES);
        assert_eq!(Shape::cylinder().parts(), CylinderParts::all());
    }

    #[test]
    fn test_shape_kind_mapping() {
        let open_top = Shape::Cylinder(CylinderParts::BOTTOM | CylinderParts::SIDES);
        assert_eq!(open_top.kind(), ShapeKind::Cylinder);
        assert!(!open_top.parts().contains(CylinderParts::TOP));
        assert_eq!(Shape::Sphere.kind(), ShapeKind::Sphere);
        assert_eq!(Shape::Box.parts(), CylinderParts::all());
    }
}
