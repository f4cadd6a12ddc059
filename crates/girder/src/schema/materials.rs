//! Material property definitions

use crate::component::Bound;
use crate::error::Result;
use crate::slot::{DoubleSlot, IntSlot, TextArraySlot, TextSlot};

/// Material property operations, release 22 schema.
pub trait MaterialsV22: Bound {
    /// Initializes a material property. If `name` is new the material is
    /// added; if it already exists its data is overwritten.
    ///
    /// `material_type` codes:
    ///
    /// * 1 = Steel
    /// * 2 = Concrete
    /// * 3 = No design
    /// * 4 = Aluminum
    /// * 5 = Cold-formed
    /// * 6 = Rebar
    /// * 7 = Tendon
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_material(
        &self,
        name: &str,
        material_type: i32,
        color: i32,
        notes: &str,
        guid: &str,
    ) -> Result<i32> {
        self.component().invoke_int(
            "SetMaterial",
            &[
                name.into(),
                material_type.into(),
                color.into(),
                notes.into(),
                guid.into(),
            ],
        )
    }

    /// [`set_material`](Self::set_material) with the host's documented
    /// defaults: program-assigned color (-1), no notes, program GUID.
    fn set_material_default(&self, name: &str, material_type: i32) -> Result<i32> {
        self.set_material(name, material_type, -1, "", "")
    }

    /// Retrieves the type code, display color, notes, and GUID of a
    /// material.
    ///
    /// Returns zero if the data is retrieved; nonzero otherwise.
    fn get_material(
        &self,
        name: &str,
        material_type: &IntSlot,
        color: &IntSlot,
        notes: &TextSlot,
        guid: &TextSlot,
    ) -> Result<i32> {
        self.component().invoke_int(
            "GetMaterial",
            &[
                name.into(),
                material_type.into(),
                color.into(),
                notes.into(),
                guid.into(),
            ],
        )
    }

    /// Assigns isotropic mechanical properties: modulus of elasticity,
    /// Poisson's ratio, and the coefficient of thermal expansion, at the
    /// given material temperature.
    ///
    /// Returns zero on success; nonzero otherwise, including when the
    /// material does not exist.
    fn set_isotropic(
        &self,
        name: &str,
        modulus: f64,
        poisson: f64,
        thermal_coeff: f64,
        temp: f64,
    ) -> Result<i32> {
        self.component().invoke_int(
            "SetMPIsotropic",
            &[
                name.into(),
                modulus.into(),
                poisson.into(),
                thermal_coeff.into(),
                temp.into(),
            ],
        )
    }

    /// [`set_isotropic`](Self::set_isotropic) at the default material
    /// temperature (0).
    fn set_isotropic_default(
        &self,
        name: &str,
        modulus: f64,
        poisson: f64,
        thermal_coeff: f64,
    ) -> Result<i32> {
        self.set_isotropic(name, modulus, poisson, thermal_coeff, 0.0)
    }

    /// Retrieves isotropic mechanical properties. The shear modulus is
    /// computed by the host from the modulus of elasticity and Poisson's
    /// ratio.
    ///
    /// Returns zero if the data is retrieved; nonzero otherwise.
    fn get_isotropic(
        &self,
        name: &str,
        modulus: &DoubleSlot,
        poisson: &DoubleSlot,
        thermal_coeff: &DoubleSlot,
        shear_modulus: &DoubleSlot,
    ) -> Result<i32> {
        self.component().invoke_int(
            "GetMPIsotropic",
            &[
                name.into(),
                modulus.into(),
                poisson.into(),
                thermal_coeff.into(),
                shear_modulus.into(),
            ],
        )
    }

    /// Returns the number of defined material properties.
    fn count(&self) -> Result<i32> {
        self.component().invoke_int("Count", &[])
    }

    /// Applies a new name to a material property.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn change_name(&self, name: &str, new_name: &str) -> Result<i32> {
        self.component()
            .invoke_int("ChangeName", &[name.into(), new_name.into()])
    }

    /// Deletes a material property.
    ///
    /// Returns zero on success; nonzero otherwise, including when the
    /// material is assigned to anything in the model.
    fn delete(&self, name: &str) -> Result<i32> {
        self.component().invoke_int("Delete", &[name.into()])
    }

    /// Retrieves the names of all defined material properties, in
    /// definition order.
    ///
    /// Returns zero if the names are retrieved; nonzero otherwise.
    fn get_name_list(&self, count: &IntSlot, names: &TextArraySlot) -> Result<i32> {
        self.component()
            .invoke_int("GetNameList", &[count.into(), names.into()])
    }
}

/// Material property operations added by the release 23 schema.
pub trait MaterialsV23: MaterialsV22 {
    /// Assigns weight per unit volume or mass per unit volume.
    ///
    /// `option` selects what `value` is: 1 = weight per unit volume,
    /// 2 = mass per unit volume; the host derives the other quantity.
    ///
    /// Returns zero on success; nonzero otherwise.
    fn set_weight_and_mass(&self, name: &str, option: i32, value: f64) -> Result<i32> {
        self.component().invoke_int(
            "SetWeightAndMass",
            &[name.into(), option.into(), value.into()],
        )
    }

    /// Retrieves weight per unit volume and mass per unit volume.
    ///
    /// Returns zero if the data is retrieved; nonzero otherwise.
    fn get_weight_and_mass(
        &self,
        name: &str,
        weight: &DoubleSlot,
        mass: &DoubleSlot,
    ) -> Result<i32> {
        self.component().invoke_int(
            "GetWeightAndMass",
            &[name.into(), weight.into(), mass.into()],
        )
    }
}
