//! Release 23 bindings
//!
//! Concrete wrappers for a host running the release 23 schema. Each
//! wrapper selects both the release 22 trait and the release 23 trait, so
//! it answers every inherited operation unchanged plus the additions,
//! with no forwarding code restated anywhere.

use std::sync::Arc;

use crate::component::{Bound, ComponentBinding};
use crate::error::Result;
use crate::profile::InstanceProfile;
use crate::schema::{
    AnalyzeV22, ApplicationV22, GroupsV22, LoadPatternsV22, LoadPatternsV23, MaterialsV22,
    MaterialsV23, ModelV22, ModelV23,
};
use crate::transport::Automation;

/// The running application instance.
pub struct Application {
    component: ComponentBinding,
    /// The model object and its entity managers
    pub model: Model,
}

impl Application {
    /// Attach to the instance published by `program`, resolving the
    /// application object, the model object, and every entity manager
    /// exactly once.
    pub fn attach(automation: Arc<dyn Automation>, program: &str) -> Result<Self> {
        let component = ComponentBinding::bind(Arc::clone(&automation), program, "Application")?;
        let model = Model::attach(automation, program)?;
        Ok(Self { component, model })
    }

    /// [`attach`](Self::attach) using the program identity recorded in a
    /// profile.
    pub fn from_profile(automation: Arc<dyn Automation>, profile: &InstanceProfile) -> Result<Self> {
        tracing::debug!(program = %profile.program, revision = ?profile.revision, "attaching release 23 bindings");
        Self::attach(automation, &profile.program)
    }
}

impl Bound for Application {
    fn component(&self) -> &ComponentBinding {
        &self.component
    }
}

impl ApplicationV22 for Application {}

/// The model object and its entity managers.
pub struct Model {
    component: ComponentBinding,
    /// Load pattern definitions
    pub load_patterns: LoadPatterns,
    /// Material property definitions
    pub materials: Materials,
    /// Group definitions
    pub groups: Groups,
    /// Analysis control
    pub analyze: Analyze,
}

impl Model {
    pub(crate) fn attach(automation: Arc<dyn Automation>, program: &str) -> Result<Self> {
        Ok(Self {
            component: ComponentBinding::bind(Arc::clone(&automation), program, "Model")?,
            load_patterns: LoadPatterns {
                component: ComponentBinding::bind(Arc::clone(&automation), program, "LoadPatterns")?,
            },
            materials: Materials {
                component: ComponentBinding::bind(Arc::clone(&automation), program, "Materials")?,
            },
            groups: Groups {
                component: ComponentBinding::bind(Arc::clone(&automation), program, "Groups")?,
            },
            analyze: Analyze {
                component: ComponentBinding::bind(automation, program, "Analyze")?,
            },
        })
    }
}

impl Bound for Model {
    fn component(&self) -> &ComponentBinding {
        &self.component
    }
}

impl ModelV22 for Model {}
impl ModelV23 for Model {}

/// Load pattern definitions.
pub struct LoadPatterns {
    component: ComponentBinding,
}

impl Bound for LoadPatterns {
    fn component(&self) -> &ComponentBinding {
        &self.component
    }
}

impl LoadPatternsV22 for LoadPatterns {}
impl LoadPatternsV23 for LoadPatterns {}

/// Material property definitions.
pub struct Materials {
    component: ComponentBinding,
}

impl Bound for Materials {
    fn component(&self) -> &ComponentBinding {
        &self.component
    }
}

impl MaterialsV22 for Materials {}
impl MaterialsV23 for Materials {}

/// Group definitions.
pub struct Groups {
    component: ComponentBinding,
}

impl Bound for Groups {
    fn component(&self) -> &ComponentBinding {
        &self.component
    }
}

impl GroupsV22 for Groups {}

/// Analysis control.
pub struct Analyze {
    component: ComponentBinding,
}

impl Bound for Analyze {
    fn component(&self) -> &ComponentBinding {
        &self.component
    }
}

impl AnalyzeV22 for Analyze {}
