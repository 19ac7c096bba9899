pub mod metalake;

pub use metalake::{
    Audit, BaseResponse, DropResponse, Metalake, MetalakeCreateRequest, MetalakeListResponse,
    MetalakeResponse, MetalakeSetRequest, MetalakeUpdate, MetalakeUpdatesRequest,
};
