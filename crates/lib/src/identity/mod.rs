pub mod keypair_util;
pub mod provider;

pub use keypair_util::KeypairUtil;
pub use provider::{
    identity_provider_from_env, IdentityProvider, KeypairFileProvider, MemoryIdentityProvider,
};

#[cfg(test)]
pub use provider::MockIdentityProvider;
