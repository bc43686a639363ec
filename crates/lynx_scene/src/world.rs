use core::fmt;

use lynx_math::prelude::*;
use lynx_anim::AnimComponent;
use lynx_logging::{log_verbose, log_warning};

use crate::{Transform, LOG_CAT};

/// Handle to an object in a [`World`]
///
/// Stores the index of the object's slot and the lifetime of the slot when the object was spawned.
/// Once the object is removed, the slot's lifetime is bumped and the handle no longer resolves.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ObjectHandle {
    index    : u32,
    lifetime : u32,
}

impl ObjectHandle {
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn lifetime(self) -> u32 {
        self.lifetime
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!("{}:{}", self.index, self.lifetime))
    }
}

/// Object living in a [`World`]
pub struct GameObject {
    name          : String,
    pub transform : Transform,
    /// Spin around the world's up axis every update
    pub spinning  : bool,
    anim          : Option<AnimComponent>,
}

impl GameObject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            spinning: false,
            anim: None,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_spin(mut self, spinning: bool) -> Self {
        self.spinning = spinning;
        self
    }

    pub fn with_anim(mut self, anim: AnimComponent) -> Self {
        self.anim = Some(anim);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn anim(&self) -> Option<&AnimComponent> {
        self.anim.as_ref()
    }

    pub fn anim_mut(&mut self) -> Option<&mut AnimComponent> {
        self.anim.as_mut()
    }

    /// Replace the animation component, returning the previous one
    pub fn set_anim(&mut self, anim: Option<AnimComponent>) -> Option<AnimComponent> {
        core::mem::replace(&mut self.anim, anim)
    }

    /// Advance the object by `delta` seconds
    pub fn update(&mut self, delta: f32) {
        if self.spinning {
            let spin = Quaternion::from_axis_angle(&Vector3::UNIT_Y, World::SPIN_SPEED * delta);
            self.transform.rotate(&spin);
        }
        if let Some(anim) = &mut self.anim {
            anim.update(delta);
        }
    }
}

/// Collection of game objects, addressed by [`ObjectHandle`]s
///
/// Slots of removed objects are reused by later spawns.
#[derive(Default)]
pub struct World {
    slots : Vec<(u32, Option<GameObject>)>,
    count : usize,
}

impl World {
    /// Rotation speed of spinning objects, in radians per second
    pub const SPIN_SPEED : f32 = f32::HALF_PI;

    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object to the world
    pub fn spawn(&mut self, object: GameObject) -> ObjectHandle {
        log_verbose!(LOG_CAT, "Spawning object '{}'", object.name);
        self.count += 1;

        if let Some(index) = self.slots.iter().position(|(_, slot)| slot.is_none()) {
            let (lifetime, slot) = &mut self.slots[index];
            *slot = Some(object);
            ObjectHandle { index: index as u32, lifetime: *lifetime }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push((0, Some(object)));
            ObjectHandle { index, lifetime: 0 }
        }
    }

    /// Remove an object from the world, invalidating its handle
    pub fn remove(&mut self, handle: ObjectHandle) -> Option<GameObject> {
        if !self.is_handle_valid(handle) {
            log_warning!(LOG_CAT, "Trying to remove an object with an invalid handle ({handle})");
            return None;
        }

        let (lifetime, slot) = &mut self.slots[handle.index as usize];
        *lifetime = lifetime.wrapping_add(1);
        self.count -= 1;
        slot.take()
    }

    pub fn is_handle_valid(&self, handle: ObjectHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn get(&self, handle: ObjectHandle) -> Option<&GameObject> {
        match self.slots.get(handle.index as usize)? {
            (lifetime, Some(object)) if *lifetime == handle.lifetime => Some(object),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, handle: ObjectHandle) -> Option<&mut GameObject> {
        match self.slots.get_mut(handle.index as usize)? {
            (lifetime, Some(object)) if *lifetime == handle.lifetime => Some(object),
            _ => None,
        }
    }

    /// Find the first object with the given name
    pub fn find(&self, name: &str) -> Option<ObjectHandle> {
        self.iter().find(|(_, object)| object.name == name).map(|(handle, _)| handle)
    }

    /// Number of objects in the world
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterate over all objects and their handles
    pub fn iter(&self) -> impl Iterator<Item = (ObjectHandle, &GameObject)> {
        self.slots.iter().enumerate().filter_map(|(index, (lifetime, slot))| {
            slot.as_ref().map(|object| (ObjectHandle { index: index as u32, lifetime: *lifetime }, object))
        })
    }

    /// Advance every object by `delta` seconds
    pub fn update(&mut self, delta: f32) {
        for object in self.slots.iter_mut().filter_map(|(_, slot)| slot.as_mut()) {
            object.update(delta);
        }
    }
}
