//! Resize edge and corner handles

/// Edge or corner handle used to initiate a resize gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeEdge {
    /// North (top) edge
    N,
    /// South (bottom) edge
    S,
    /// East (right) edge
    E,
    /// West (left) edge
    W,
    /// Northeast corner
    NE,
    /// Northwest corner
    NW,
    /// Southeast corner
    SE,
    /// Southwest corner
    SW,
}

impl ResizeEdge {
    /// Parse a direction string (`"n"`, `"se"`, ...) as sent by view bindings
    pub fn parse(direction: &str) -> Option<Self> {
        match direction {
            "n" => Some(ResizeEdge::N),
            "s" => Some(ResizeEdge::S),
            "e" => Some(ResizeEdge::E),
            "w" => Some(ResizeEdge::W),
            "ne" => Some(ResizeEdge::NE),
            "nw" => Some(ResizeEdge::NW),
            "se" => Some(ResizeEdge::SE),
            "sw" => Some(ResizeEdge::SW),
            _ => None,
        }
    }

    /// Check if this is a corner handle
    #[inline]
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            ResizeEdge::NE | ResizeEdge::NW | ResizeEdge::SE | ResizeEdge::SW
        )
    }

    /// Whether this handle moves the north (top) boundary
    #[inline]
    pub fn resizes_north(self) -> bool {
        matches!(self, ResizeEdge::N | ResizeEdge::NE | ResizeEdge::NW)
    }

    /// Whether this handle moves the south (bottom) boundary
    #[inline]
    pub fn resizes_south(self) -> bool {
        matches!(self, ResizeEdge::S | ResizeEdge::SE | ResizeEdge::SW)
    }

    /// Whether this handle moves the east (right) boundary
    #[inline]
    pub fn resizes_east(self) -> bool {
        matches!(self, ResizeEdge::E | ResizeEdge::NE | ResizeEdge::SE)
    }

    /// Whether this handle moves the west (left) boundary
    #[inline]
    pub fn resizes_west(self) -> bool {
        matches!(self, ResizeEdge::W | ResizeEdge::NW | ResizeEdge::SW)
    }

    /// Get CSS cursor style for this handle
    pub fn cursor(self) -> &'static str {
        match self {
            ResizeEdge::N | ResizeEdge::S => "ns-resize",
            ResizeEdge::E | ResizeEdge::W => "ew-resize",
            ResizeEdge::NE | ResizeEdge::SW => "nesw-resize",
            ResizeEdge::NW | ResizeEdge::SE => "nwse-resize",
        }
    }
}
