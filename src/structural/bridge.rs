//! Bridge: remotes (the abstraction) and devices (the implementation) vary independently.

const MAX_VOLUME: u8 = 100;
const VOLUME_STEP: u8 = 10;

pub trait Device {
    fn name(&self) -> &str;
    fn is_enabled(&self) -> bool;
    fn enable(&mut self);
    fn disable(&mut self);
    fn volume(&self) -> u8;
    /// Values above the maximum are clamped.
    fn set_volume(&mut self, percent: u8);
    fn channel(&self) -> u32;
    /// Channels start at 1; 0 is clamped up.
    fn set_channel(&mut self, channel: u32);
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct DeviceState {
    on: bool,
    volume: u8,
    channel: u32,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            on: false,
            volume: 30,
            channel: 1,
        }
    }
}

macro_rules! device {
    ($name:ident, $label:expr) => {
        #[derive(Debug, Default, Clone, PartialEq, Eq)]
        pub struct $name {
            state: DeviceState,
        }

        impl Device for $name {
            fn name(&self) -> &str {
                $label
            }

            fn is_enabled(&self) -> bool {
                self.state.on
            }

            fn enable(&mut self) {
                self.state.on = true;
            }

            fn disable(&mut self) {
                self.state.on = false;
            }

            fn volume(&self) -> u8 {
                self.state.volume
            }

            fn set_volume(&mut self, percent: u8) {
                self.state.volume = percent.min(MAX_VOLUME);
            }

            fn channel(&self) -> u32 {
                self.state.channel
            }

            fn set_channel(&mut self, channel: u32) {
                self.state.channel = channel.max(1);
            }
        }
    };
}

device!(Tv, "TV");
device!(Radio, "Radio");

pub struct Remote<D: Device> {
    device: D,
}

impl<D: Device> Remote<D> {
    pub fn new(device: D) -> Self {
        Self { device }
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn toggle_power(&mut self) {
        if self.device.is_enabled() {
            self.device.disable();
        } else {
            self.device.enable();
        }
    }

    pub fn volume_down(&mut self) {
        let volume = self.device.volume().saturating_sub(VOLUME_STEP);
        self.device.set_volume(volume);
    }

    pub fn volume_up(&mut self) {
        let volume = self.device.volume().saturating_add(VOLUME_STEP);
        self.device.set_volume(volume);
    }

    pub fn channel_down(&mut self) {
        let channel = self.device.channel().saturating_sub(1);
        self.device.set_channel(channel);
    }

    pub fn channel_up(&mut self) {
        let channel = self.device.channel().saturating_add(1);
        self.device.set_channel(channel);
    }
}

/// Extends the abstraction without touching any device.
pub struct AdvancedRemote<D: Device> {
    remote: Remote<D>,
}

impl<D: Device> AdvancedRemote<D> {
    pub fn new(device: D) -> Self {
        Self {
            remote: Remote::new(device),
        }
    }

    pub fn mute(&mut self) {
        self.remote.device.set_volume(0);
    }
}

impl<D: Device> std::ops::Deref for AdvancedRemote<D> {
    type Target = Remote<D>;

    fn deref(&self) -> &Self::Target {
        &self.remote
    }
}

impl<D: Device> std::ops::DerefMut for AdvancedRemote<D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.remote
    }
}

fn describe(device: &impl Device) -> String {
    format!(
        "{}: power={} volume={} channel={}",
        device.name(),
        if device.is_enabled() { "on" } else { "off" },
        device.volume(),
        device.channel()
    )
}

pub fn demo() -> Vec<String> {
    let mut remote = Remote::new(Tv::default());
    remote.toggle_power();
    remote.channel_up();
    remote.volume_up();

    let mut advanced = AdvancedRemote::new(Radio::default());
    advanced.toggle_power();
    advanced.mute();

    vec![describe(remote.device()), describe(advanced.device())]
}
