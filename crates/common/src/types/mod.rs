use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Root greeting payload; the key is capitalized on the wire (`{"Hello":"world"}`).
#[derive(Serialize, Debug)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: &'static str,
}

impl Default for Greeting {
    fn default() -> Self {
        Self { hello: "world" }
    }
}
