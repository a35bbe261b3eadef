pub mod code_fence_utils;

#[cfg(test)]
pub mod test_server;
