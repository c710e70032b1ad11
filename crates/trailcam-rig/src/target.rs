//! Follow targets and the ordered target set handed to the solver.

use glam::{Quat, Vec3};

/// A world-space point the rig follows, with the direction it is facing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    /// World position.
    pub position: Vec3,
    /// Unit forward direction.
    pub forward: Vec3,
}

impl Target {
    /// Creates a target, normalizing `forward`. A zero-length forward falls
    /// back to world +Z.
    pub fn new(position: Vec3, forward: Vec3) -> Self {
        Self {
            position,
            forward: forward.try_normalize().unwrap_or(Vec3::Z),
        }
    }

    /// Creates a target from a position and orientation. Forward is the
    /// rotated +Z axis.
    pub fn from_rotation(position: Vec3, rotation: Quat) -> Self {
        Self::new(position, rotation.normalize() * Vec3::Z)
    }

    /// A target at `position` facing world +Z.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::Z)
    }
}

/// Identifies a target within a [`TargetSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

/// Ordered collection of targets with one designated primary.
///
/// The primary is always present, so the sequence is never empty.
/// Targets and their ids are stored in parallel so the solver can borrow
/// a plain `&[Target]`.
#[derive(Clone, Debug)]
pub struct TargetSet {
    primary: TargetId,
    ids: Vec<TargetId>,
    targets: Vec<Target>,
}

impl TargetSet {
    /// Creates a set containing only the primary target.
    pub fn new(primary_id: TargetId, primary: Target) -> Self {
        Self {
            primary: primary_id,
            ids: vec![primary_id],
            targets: vec![primary],
        }
    }

    /// Creates a set from an ordered list of targets.
    ///
    /// If `others` does not already contain `primary_id`, the primary is
    /// appended at the end. If it does, the listed entry is kept in place
    /// and `primary` is ignored. Duplicate ids in `others` keep their
    /// first occurrence.
    pub fn with_targets(
        primary_id: TargetId,
        primary: Target,
        others: impl IntoIterator<Item = (TargetId, Target)>,
    ) -> Self {
        let mut set = Self {
            primary: primary_id,
            ids: Vec::new(),
            targets: Vec::new(),
        };
        for (id, target) in others {
            if !set.contains(id) {
                set.ids.push(id);
                set.targets.push(target);
            }
        }
        if !set.contains(primary_id) {
            set.ids.push(primary_id);
            set.targets.push(primary);
        }
        set
    }

    /// Id of the primary target.
    pub fn primary_id(&self) -> TargetId {
        self.primary
    }

    /// The primary target.
    pub fn primary(&self) -> &Target {
        // The primary id is inserted on construction and can never be removed.
        let index = self.index_of(self.primary).unwrap_or(0);
        &self.targets[index]
    }

    /// All targets in insertion order, primary included.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Ids in the same order as [`targets`](Self::targets).
    pub fn ids(&self) -> &[TargetId] {
        &self.ids
    }

    /// Number of targets, primary included.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Never true while the primary is present.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Returns `true` if a target with `id` is in the set.
    pub fn contains(&self, id: TargetId) -> bool {
        self.ids.contains(&id)
    }

    /// Returns the target with `id`.
    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.index_of(id).map(|i| &self.targets[i])
    }

    /// Adds a target at the end, or replaces it if `id` is already present.
    pub fn insert(&mut self, id: TargetId, target: Target) {
        match self.index_of(id) {
            Some(i) => self.targets[i] = target,
            None => {
                self.ids.push(id);
                self.targets.push(target);
            }
        }
    }

    /// Replaces an existing target. Returns `false` if `id` is unknown.
    pub fn update(&mut self, id: TargetId, target: Target) -> bool {
        match self.index_of(id) {
            Some(i) => {
                self.targets[i] = target;
                true
            }
            None => false,
        }
    }

    /// Removes a secondary target, preserving the order of the rest.
    /// The primary cannot be removed; returns `None` for it and for
    /// unknown ids.
    pub fn remove(&mut self, id: TargetId) -> Option<Target> {
        if id == self.primary {
            return None;
        }
        let i = self.index_of(id)?;
        self.ids.remove(i);
        Some(self.targets.remove(i))
    }

    fn index_of(&self, id: TargetId) -> Option<usize> {
        self.ids.iter().position(|&other| other == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRIMARY: TargetId = TargetId(0);

    #[test]
    fn test_forward_is_normalized() {
        let t = Target::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0));
        assert!((t.forward - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_zero_forward_falls_back_to_z() {
        let t = Target::new(Vec3::ONE, Vec3::ZERO);
        assert_eq!(t.forward, Vec3::Z);
    }

    #[test]
    fn test_forward_from_rotation() {
        let t = Target::from_rotation(Vec3::ZERO, Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        assert!((t.forward - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_primary_appended_when_missing() {
        let set = TargetSet::with_targets(
            PRIMARY,
            Target::at(Vec3::ZERO),
            [
                (TargetId(1), Target::at(Vec3::X)),
                (TargetId(2), Target::at(Vec3::Y)),
            ],
        );
        assert_eq!(set.len(), 3);
        assert_eq!(set.ids(), &[TargetId(1), TargetId(2), PRIMARY]);
        assert_eq!(set.primary().position, Vec3::ZERO);
    }

    #[test]
    fn test_primary_not_duplicated_when_listed() {
        let set = TargetSet::with_targets(
            PRIMARY,
            Target::at(Vec3::new(9.0, 9.0, 9.0)),
            [
                (PRIMARY, Target::at(Vec3::X)),
                (TargetId(1), Target::at(Vec3::Y)),
            ],
        );
        assert_eq!(set.len(), 2);
        assert_eq!(set.primary().position, Vec3::X);
    }

    #[test]
    fn test_primary_cannot_be_removed() {
        let mut set = TargetSet::new(PRIMARY, Target::at(Vec3::ZERO));
        set.insert(TargetId(1), Target::at(Vec3::X));
        assert!(set.remove(PRIMARY).is_none());
        assert!(set.remove(TargetId(1)).is_some());
        assert_eq!(set.len(), 1);
        assert!(!set.is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_rejected() {
        let mut set = TargetSet::new(PRIMARY, Target::at(Vec3::ZERO));
        assert!(!set.update(TargetId(7), Target::at(Vec3::X)));
        assert!(set.update(PRIMARY, Target::at(Vec3::X)));
        assert_eq!(set.primary().position, Vec3::X);
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut set = TargetSet::new(PRIMARY, Target::at(Vec3::ZERO));
        set.insert(TargetId(3), Target::at(Vec3::X));
        set.insert(TargetId(3), Target::at(Vec3::Y));
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(TargetId(3)).map(|t| t.position), Some(Vec3::Y));
    }
}
