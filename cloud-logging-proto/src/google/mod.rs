pub mod api;

pub mod logging {
    pub mod r#type;
    pub mod v2;
}

pub mod protobuf;
pub mod rpc;
