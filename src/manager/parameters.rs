use super::ConfigManager;
use crate::error::Result;
use crate::manipulator::Manipulator;
use crate::yaml::Value;
use tracing::info;

impl<M: Manipulator> ConfigManager<M> {
    /// Add a parameter to `parameters.yml` and `parameters.yml.dist`.
    ///
    /// `parameters.yml` is rewritten in full; the `.dist` template keeps its
    /// existing text and gets the entry (and `comment`) appended.
    pub fn add_parameter(&self, name: &str, value: &Value, comment: Option<&str>) -> Result<()> {
        info!(parameter = name, "Setting parameter in parameters.yml");

        self.manipulator
            .add_parameter_to_file(&self.layout.parameters_file(), name, value, false, None)?;
        self.manipulator.add_parameter_to_file(
            &self.layout.parameters_dist_file(),
            name,
            value,
            true,
            comment,
        )
    }
}
