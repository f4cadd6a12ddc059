//! Group definitions

use crate::component::Bound;
use crate::error::Result;
use crate::slot::{IntArraySlot, IntSlot, TextArraySlot};

/// Group operations, release 22 schema.
pub trait GroupsV22: Bound {
    /// Defines a group. Adds it if `name` is new, otherwise overwrites its
    /// specification. `color` is a display color, -1 for program-assigned.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_group(&self, name: &str, color: i32) -> Result<i32> {
        self.component()
            .invoke_int("SetGroup", &[name.into(), color.into()])
    }

    /// [`set_group`](Self::set_group) with a program-assigned color.
    fn set_group_default(&self, name: &str) -> Result<i32> {
        self.set_group(name, -1)
    }

    /// Retrieves a group's specification.
    ///
    /// Returns zero if the group exists; nonzero otherwise.
    fn get_group(&self, name: &str, color: &IntSlot) -> Result<i32> {
        self.component()
            .invoke_int("GetGroup", &[name.into(), color.into()])
    }

    /// Returns the number of defined groups.
    fn count(&self) -> Result<i32> {
        self.component().invoke_int("Count", &[])
    }

    /// Deletes a group.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn delete(&self, name: &str) -> Result<i32> {
        self.component().invoke_int("Delete", &[name.into()])
    }

    /// Retrieves the names of all defined groups, in definition order.
    ///
    /// Returns zero if the names are retrieved; nonzero otherwise.
    fn get_name_list(&self, count: &IntSlot, names: &TextArraySlot) -> Result<i32> {
        self.component()
            .invoke_int("GetNameList", &[count.into(), names.into()])
    }

    /// Retrieves the assignments to a group: parallel arrays of object
    /// type codes (1 = point, 2 = frame, 3 = cable, 4 = tendon, 5 = area,
    /// 6 = solid, 7 = link) and object names.
    ///
    /// Returns zero if the assignments are retrieved; nonzero otherwise.
    fn get_assignments(
        &self,
        name: &str,
        count: &IntSlot,
        object_types: &IntArraySlot,
        object_names: &TextArraySlot,
    ) -> Result<i32> {
        self.component().invoke_int(
            "GetAssignments",
            &[
                name.into(),
                count.into(),
                object_types.into(),
                object_names.into(),
            ],
        )
    }
}
