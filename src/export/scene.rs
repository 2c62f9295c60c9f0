use crate::export::Rotation;

/// Host object type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectKind {
	/// Transform-only placement object.
	#[default]
	Empty,
	/// Polygon mesh.
	Mesh,
	/// Curve or text.
	Curve,
	/// Armature rig.
	Armature,
	/// Camera.
	Camera,
	/// Light source.
	Light,
	/// Any other host type.
	#[serde(other)]
	Other,
}

/// Host instancing mode of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstanceKind {
	/// No instancing.
	#[default]
	None,
	/// Instances children on vertices.
	Verts,
	/// Instances children on faces.
	Faces,
	/// Instances a collection.
	Collection,
}

/// One object record as exposed by the host scene graph.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SceneObject {
	/// Unique object name within the scene.
	pub name: String,
	/// Object type.
	#[serde(rename = "type", default)]
	pub kind: ObjectKind,
	/// Instancing mode.
	#[serde(rename = "instance_type", default)]
	pub instance_kind: InstanceKind,
	/// Name of the instanced collection, when instancing a collection.
	#[serde(default)]
	pub instance_collection: Option<String>,
	/// Location in host space.
	#[serde(default)]
	pub location: [f64; 3],
	/// Rotation in every host representation.
	#[serde(flatten)]
	pub rotation: Rotation,
	/// Scale in host space.
	#[serde(default = "unit_scale")]
	pub scale: [f64; 3],
	/// Hidden in the viewport.
	#[serde(default)]
	pub hide_viewport: bool,
	/// Hidden in renders.
	#[serde(default)]
	pub hide_render: bool,
}

fn unit_scale() -> [f64; 3] {
	[1.0; 3]
}

impl SceneObject {
	/// Plain empty at the origin with identity transform.
	pub fn empty(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			kind: ObjectKind::Empty,
			instance_kind: InstanceKind::None,
			instance_collection: None,
			location: [0.0; 3],
			rotation: Rotation::default(),
			scale: unit_scale(),
			hide_viewport: false,
			hide_render: false,
		}
	}

	/// Empty instancing `collection`.
	pub fn collection_instance(name: impl Into<String>, collection: impl Into<String>) -> Self {
		Self {
			instance_kind: InstanceKind::Collection,
			instance_collection: Some(collection.into()),
			..Self::empty(name)
		}
	}

	/// Whether this object is an empty instancing a collection.
	pub fn is_collection_instance(&self) -> bool {
		self.kind == ObjectKind::Empty && self.instance_kind == InstanceKind::Collection
	}

	/// Whether neither visibility flag hides the object.
	pub fn is_visible(&self) -> bool {
		!(self.hide_viewport || self.hide_render)
	}
}

/// Collection datablock, optionally linked from a library.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Collection {
	/// Collection name.
	pub name: String,
	/// Owning library name; `None` for local collections.
	#[serde(default)]
	pub library: Option<String>,
}

/// External library datablock.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Library {
	/// Library name (for example `props.blend`).
	pub name: String,
	/// Library path (for example `//assets/props.blend`).
	#[serde(default)]
	pub filepath: String,
}

impl Library {
	/// Base file name of the library path, falling back to the library name.
	///
	/// Strips the host-relative `//` prefix and any `/` or `\` directories.
	pub fn resolved_file_name(&self) -> &str {
		let path = self.filepath.strip_prefix("//").unwrap_or(&self.filepath);
		let base = path.rsplit(['/', '\\']).next().unwrap_or(path);
		if base.is_empty() { &self.name } else { base }
	}
}

/// Read view of a host scene graph consumed by the exporter.
///
/// Objects are addressed by enumeration index so the exporter can briefly
/// borrow one mutably for a scoped rotation-mode switch.
pub trait SceneSource {
	/// Number of objects, in native enumeration order.
	fn object_count(&self) -> usize;
	/// Object at enumeration `index`.
	fn object(&self, index: usize) -> Option<&SceneObject>;
	/// Mutable object at enumeration `index`.
	fn object_mut(&mut self, index: usize) -> Option<&mut SceneObject>;
	/// Collection by name.
	fn collection(&self, name: &str) -> Option<&Collection>;
	/// Library by name.
	fn library(&self, name: &str) -> Option<&Library>;
}

/// In-memory scene, deserializable from a host snapshot.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Scene {
	/// Objects in enumeration order.
	pub objects: Vec<SceneObject>,
	/// Collections.
	pub collections: Vec<Collection>,
	/// Libraries.
	pub libraries: Vec<Library>,
}

impl Scene {
	/// Append an object, returning `self` for chaining.
	pub fn push_object(&mut self, object: SceneObject) -> &mut Self {
		self.objects.push(object);
		self
	}

	/// Append a collection, linked from `library` when given.
	pub fn push_collection(&mut self, name: impl Into<String>, library: Option<&str>) -> &mut Self {
		self.collections.push(Collection {
			name: name.into(),
			library: library.map(str::to_owned),
		});
		self
	}

	/// Append a library.
	pub fn push_library(&mut self, name: impl Into<String>, filepath: impl Into<String>) -> &mut Self {
		self.libraries.push(Library {
			name: name.into(),
			filepath: filepath.into(),
		});
		self
	}
}

impl SceneSource for Scene {
	fn object_count(&self) -> usize {
		self.objects.len()
	}

	fn object(&self, index: usize) -> Option<&SceneObject> {
		self.objects.get(index)
	}

	fn object_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
		self.objects.get_mut(index)
	}

	fn collection(&self, name: &str) -> Option<&Collection> {
		self.collections.iter().find(|item| item.name == name)
	}

	fn library(&self, name: &str) -> Option<&Library> {
		self.libraries.iter().find(|item| item.name == name)
	}
}
