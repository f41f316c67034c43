use super::vector3::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvCoord {
    pub u: f64,
    pub v: f64,
}

impl UvCoord {

    pub const fn new(u: f64, v: f64) -> Self {
        UvCoord { u, v }
    }
}

/// One corner of a face: 1-based indices into the mesh tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceVertex {
    pub vertex: usize,
    pub uv: Option<usize>,
    pub normal: Option<usize>,
}

impl FaceVertex {

    /// Accepts `v`, `v/vt`, `v//vn` and `v/vt/vn`.
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split('/');

        let vertex = parts.next()?.parse().ok()?;
        let uv = match parts.next() {
            None | Some("") => None,
            Some(v) => Some(v.parse().ok()?),
        };
        let normal = match parts.next() {
            None => None,
            Some(v) => Some(v.parse().ok()?),
        };

        if parts.next().is_some() {
            return None;
        }

        Some(FaceVertex { vertex, uv, normal })
    }
}

/// Vertex, normal and uv tables shared by all faces of the scene.
#[derive(Debug, Default)]
pub struct MeshData {
    vertices: Vec<Vector3>,
    normals: Vec<Vector3>,
    uvs: Vec<UvCoord>,
}

impl MeshData {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_vertex(&mut self, vertex: Vector3) {
        self.vertices.push(vertex);
    }

    pub fn add_normal(&mut self, normal: Vector3) {
        self.normals.push(normal.normalized());
    }

    pub fn add_uv(&mut self, uv: UvCoord) {
        self.uvs.push(uv);
    }

    pub fn vertex(&self, index: usize) -> Option<&Vector3> {
        one_based(&self.vertices, index)
    }

    pub fn normal(&self, index: usize) -> Option<&Vector3> {
        one_based(&self.normals, index)
    }

    pub fn uv(&self, index: usize) -> Option<&UvCoord> {
        one_based(&self.uvs, index)
    }

    pub fn vertices(&self) -> &Vec<Vector3> {
        &self.vertices
    }

    pub fn normals(&self) -> &Vec<Vector3> {
        &self.normals
    }

    pub fn uvs(&self) -> &Vec<UvCoord> {
        &self.uvs
    }
}

fn one_based<T>(values: &[T], index: usize) -> Option<&T> {
    if index == 0 {
        None
    } else {
        values.get(index - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_face_vertex() {
        assert_eq!(FaceVertex::parse("3"), Some(FaceVertex { vertex: 3, uv: None, normal: None }));
        assert_eq!(FaceVertex::parse("3/2"), Some(FaceVertex { vertex: 3, uv: Some(2), normal: None }));
        assert_eq!(FaceVertex::parse("3//4"), Some(FaceVertex { vertex: 3, uv: None, normal: Some(4) }));
        assert_eq!(FaceVertex::parse("3/2/4"), Some(FaceVertex { vertex: 3, uv: Some(2), normal: Some(4) }));
    }

    #[test]
    fn test_parse_face_vertex_invalid() {
        assert_eq!(FaceVertex::parse(""), None);
        assert_eq!(FaceVertex::parse("a/1"), None);
        assert_eq!(FaceVertex::parse("1/2/3/4"), None);
    }

    #[test]
    fn test_one_based_lookup() {
        let mut mesh = MeshData::new();
        mesh.add_vertex(Vector3::new(1.0, 2.0, 3.0));

        assert_eq!(mesh.vertex(0), None);
        assert_eq!(mesh.vertex(1), Some(&Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(mesh.vertex(2), None);
    }
}
