pub mod operations;

pub use operations::{
    Amount, CreateOperationRequest, Operation, OperationId, UpdateOperationRequest,
};
