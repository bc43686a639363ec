use lynx_math::prelude::*;
use lynx_logging::{log_error, log_debug};

use crate::{Error, Result, LOG_CAT, MAX_JOINTS};

/// Joint of a skeleton
#[derive(Clone, Debug)]
pub struct Joint {
    name            : String,
    parent          : i32,
    local_bind_pose : Matrix4,
    inv_bind_pose   : Matrix4,
}

impl Joint {
    /// Create a joint from its bind pose relative to its parent
    ///
    /// The root joint uses `-1` or `0` as `parent`, every other joint needs a parent with a lower index than its own.
    pub fn new(name: impl Into<String>, parent: i32, local_bind_pose: Matrix4) -> Self {
        Self {
            name: name.into(),
            parent,
            local_bind_pose,
            inv_bind_pose: Matrix4::IDENTITY,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the raw parent index, as passed to [`Joint::new`]
    pub fn parent_index(&self) -> i32 {
        self.parent
    }

    /// Local bind pose, relative to the parent joint
    pub fn local_bind_pose(&self) -> &Matrix4 {
        &self.local_bind_pose
    }

    /// Inverse of the global bind pose, maps model space into the space of this joint
    pub fn inv_bind_pose(&self) -> &Matrix4 {
        &self.inv_bind_pose
    }
}

/// Joint hierarchy, stored so that every parent comes before its children
#[derive(Clone, Debug)]
pub struct Skeleton {
    joints : Vec<Joint>,
}

impl Skeleton {
    /// Create a skeleton and calculate the inverse bind pose of every joint
    pub fn new(joints: Vec<Joint>) -> Result<Self> {
        if let Err(err) = Self::validate(&joints) {
            log_error!(LOG_CAT, Self::new, "{err}");
            return Err(err);
        }

        let mut skeleton = Self { joints };
        skeleton.calculate_inv_bind_poses();

        log_debug!(LOG_CAT, Self::new, "Created skeleton with {} joints", skeleton.joints.len());
        Ok(skeleton)
    }

    fn validate(joints: &[Joint]) -> Result<()> {
        let Some(root) = joints.first() else {
            return Err(Error::InvalidSkeleton("skeleton has no joints".to_string()));
        };
        if joints.len() > MAX_JOINTS {
            return Err(Error::InvalidSkeleton(format!("skeleton has {} joints, at most {MAX_JOINTS} are supported", joints.len())));
        }
        if root.parent != -1 && root.parent != 0 {
            return Err(Error::InvalidSkeleton(format!("root joint '{}' has parent {}, expected -1 or 0", root.name, root.parent)));
        }

        for (idx, joint) in joints.iter().enumerate().skip(1) {
            if joint.parent < 0 || joint.parent as usize >= idx {
                return Err(Error::InvalidSkeleton(format!("joint {idx} ('{}') has parent {}, which does not come before it", joint.name, joint.parent)));
            }
        }
        Ok(())
    }

    // Accumulate the global bind poses down the hierarchy first, then invert all of them
    fn calculate_inv_bind_poses(&mut self) {
        self.joints[0].inv_bind_pose = self.joints[0].local_bind_pose;
        for idx in 1..self.joints.len() {
            let mut global = self.joints[self.joints[idx].parent as usize].inv_bind_pose;
            global.multiply(&self.joints[idx].local_bind_pose);
            self.joints[idx].inv_bind_pose = global;
        }

        for joint in &mut self.joints {
            joint.inv_bind_pose.invert();
        }
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }

    pub fn joint(&self, idx: usize) -> Option<&Joint> {
        self.joints.get(idx)
    }

    /// Find the index of a joint by name
    pub fn find_joint(&self, name: &str) -> Option<usize> {
        self.joints.iter().position(|joint| joint.name == name)
    }

    /// Get the index of the parent of a joint, `None` for the root
    pub fn parent_of(&self, idx: usize) -> Option<usize> {
        match idx {
            0 => None,
            _ => self.joints.get(idx).map(|joint| joint.parent as usize),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Vec<Joint> {
        vec![
            Joint::new("root", -1, Matrix4::create_translation(&Vector3::new(0.0, 1.0, 0.0))),
            Joint::new("spine", 0, Matrix4::create_rotation_z(0.5)),
            Joint::new("head", 1, Matrix4::create_translation(&Vector3::new(0.0, 2.0, 0.0))),
            Joint::new("arm", 1, Matrix4::create_rotation_x(-0.25)),
        ]
    }

    #[test]
    fn inverse_bind_pose_round_trip() {
        let skeleton = Skeleton::new(chain()).unwrap();

        let mut globals: Vec<Matrix4> = Vec::new();
        for (idx, joint) in skeleton.joints().iter().enumerate() {
            let global = match skeleton.parent_of(idx) {
                Some(parent) => globals[parent] * *joint.local_bind_pose(),
                None => *joint.local_bind_pose(),
            };
            assert!((global * *joint.inv_bind_pose()).is_close_to(Matrix4::IDENTITY, 1e-5), "joint {}", joint.name());
            globals.push(global);
        }
    }

    #[test]
    fn root_inverse_is_inverted_local() {
        let skeleton = Skeleton::new(chain()).unwrap();
        let mut expected = Vector3::ZERO;
        expected.transform(skeleton.joints()[0].inv_bind_pose());
        assert!(expected.is_close_to(Vector3::new(0.0, -1.0, 0.0), 1e-6));
    }

    #[test]
    fn root_may_be_its_own_parent() {
        let joints = vec![Joint::new("root", 0, Matrix4::IDENTITY), Joint::new("child", 0, Matrix4::IDENTITY)];
        let skeleton = Skeleton::new(joints).unwrap();
        assert_eq!(skeleton.parent_of(0), None);
        assert_eq!(skeleton.parent_of(1), Some(0));
        assert_eq!(skeleton.find_joint("child"), Some(1));
        assert_eq!(skeleton.find_joint("tail"), None);
    }

    #[test]
    fn rejects_invalid_hierarchies() {
        let log = crate::capture_logs();
        assert!(matches!(Skeleton::new(Vec::new()), Err(Error::InvalidSkeleton(_))));
        assert!(log.contains("Invalid skeleton: skeleton has no joints"));

        let mut bad_root = chain();
        bad_root[0] = Joint::new("root", 2, Matrix4::IDENTITY);
        assert!(matches!(Skeleton::new(bad_root), Err(Error::InvalidSkeleton(_))));

        let mut forward_parent = chain();
        forward_parent[1] = Joint::new("spine", 3, Matrix4::IDENTITY);
        assert!(matches!(Skeleton::new(forward_parent), Err(Error::InvalidSkeleton(_))));

        let mut self_parent = chain();
        self_parent[2] = Joint::new("head", 2, Matrix4::IDENTITY);
        assert!(matches!(Skeleton::new(self_parent), Err(Error::InvalidSkeleton(_))));

        let mut negative_parent = chain();
        negative_parent[3] = Joint::new("arm", -1, Matrix4::IDENTITY);
        assert!(matches!(Skeleton::new(negative_parent), Err(Error::InvalidSkeleton(_))));

        let too_many = (0..=MAX_JOINTS).map(|idx| Joint::new(format!("joint{idx}"), idx as i32 - 1, Matrix4::IDENTITY)).collect();
        assert!(matches!(Skeleton::new(too_many), Err(Error::InvalidSkeleton(_))));
    }
}
