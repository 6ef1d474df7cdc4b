pub mod clock;
pub mod device_addr;
pub mod formats;
pub mod mac_addr;
pub mod metadata;
pub mod stream;
pub mod time_spec;
pub mod tune;

pub use clock::{ClockConfig, PpsPolarity, PpsSource, RefSource};
pub use device_addr::{DeviceAddr, ARG_DELIM, PAIR_DELIM};
pub use formats::{ByteOrder, IoTag, IoType, OtwType};
pub use mac_addr::{MacAddr, MAC_ADDR_LEN};
pub use metadata::TxMetadata;
pub use stream::{StreamCommand, StreamMode};
pub use time_spec::TimeSpec;
pub use tune::{TunePolicy, TuneRequest, TuneResult};
