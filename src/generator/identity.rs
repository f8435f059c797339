//! Machine and process discriminators embedded in every generated ObjectId.

use crate::layout::MAX_UINT24;
use crate::{Error, Result};

/// The machine and process discriminators a [`Generator`] stamps into every identifier.
///
/// [`Generator`]: super::Generator
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Discriminators {
    machine: u32,
    pid: u16,
}

impl Discriminators {
    /// Creates a pair from explicit values.
    ///
    /// Fails with [`Error::OutOfRange`] if `machine` does not fit in 24 bits.
    pub fn new(machine: u32, pid: u16) -> Result<Self> {
        if machine > MAX_UINT24 {
            return Err(Error::out_of_range("machine", machine as i64));
        }
        Ok(Self { machine, pid })
    }

    /// Returns the 24-bit machine discriminator.
    pub const fn machine(&self) -> u32 {
        self.machine
    }

    /// Returns the 16-bit process discriminator.
    pub const fn pid(&self) -> u16 {
        self.pid
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod detect {
    use super::Discriminators;
    use crate::layout::MAX_UINT24;
    use std::{
        collections::hash_map::DefaultHasher,
        env,
        hash::{Hash, Hasher},
    };

    impl Discriminators {
        /// Derives the discriminators from the host name and the current process id.
        ///
        /// Equivalent to [`detect_with_instance("")`](Self::detect_with_instance).
        pub fn detect() -> Self {
            Self::detect_with_instance("")
        }

        /// Derives the discriminators from the host name qualified by `instance`, and the current
        /// process id.
        ///
        /// The qualifier separates independent instances running under one host name, such as
        /// containers sharing a hostname or several services in one process. Lookups that fail
        /// never surface as errors: an unreadable host name hashes as empty and an unavailable
        /// process id becomes `0`, both of which only weaken collision resistance.
        pub fn detect_with_instance(instance: &str) -> Self {
            let host = host_name().unwrap_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!("host name unavailable; machine discriminator uses instance only");
                String::new()
            });

            let pid = process_id().unwrap_or_else(|| {
                #[cfg(feature = "tracing")]
                tracing::warn!("process id unavailable; using 0 as process discriminator");
                0
            });

            Self {
                machine: machine_hash(&host, instance),
                pid: pid as u16,
            }
        }
    }

    /// Returns the low 24 bits of the hash of `host` qualified by `instance`.
    pub(super) fn machine_hash(host: &str, instance: &str) -> u32 {
        let mut hasher = DefaultHasher::new();
        host.hash(&mut hasher);
        instance.hash(&mut hasher);
        hasher.finish() as u32 & MAX_UINT24
    }

    /// Returns the host name reported by the OS, falling back to the environment and, on Unix,
    /// the kernel host name files.
    pub(super) fn host_name() -> Option<String> {
        #[cfg(any(unix, windows))]
        let from_os = gethostname::gethostname().into_string().ok();
        #[cfg(not(any(unix, windows)))]
        let from_os = None;

        let from_env = ["HOSTNAME", "COMPUTERNAME"]
            .into_iter()
            .filter_map(|key| env::var(key).ok());

        #[cfg(unix)]
        let from_files = ["/etc/hostname", "/proc/sys/kernel/hostname"]
            .into_iter()
            .filter_map(|path| std::fs::read_to_string(path).ok());
        #[cfg(not(unix))]
        let from_files = core::iter::empty();

        from_os
            .into_iter()
            .chain(from_env)
            .chain(from_files)
            .map(|name| name.trim().to_owned())
            .find(|name| !name.is_empty())
    }

    #[cfg(not(target_family = "wasm"))]
    fn process_id() -> Option<u32> {
        Some(std::process::id())
    }

    // std::process::id() panics on wasm targets
    #[cfg(target_family = "wasm")]
    fn process_id() -> Option<u32> {
        None
    }
}
