use serde::{Deserialize, Serialize};

pub trait ConfigSerializer<TValue> {
    fn serialize(&self, value: &TValue) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TValue, String>;
}

#[derive(Clone, Copy, Debug)]
pub struct YamlConfigSerializer;

impl Default for YamlConfigSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<TValue> ConfigSerializer<TValue> for YamlConfigSerializer
where
    TValue: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, value: &TValue) -> Result<String, String> {
        serde_yaml_ng::to_string(value).map_err(|e| format!("Failed to serialize: {}", e))
    }

    fn deserialize(&self, content: &str) -> Result<TValue, String> {
        serde_yaml_ng::from_str(content).map_err(|e| format!("Failed to deserialize: {}", e))
    }
}
