use crate::body::Rgba;

/// Display color, recolored on collision by the contact observer.
pub struct Color(pub Rgba);
