use netsonde_common::tooling::{NetTooling, ToolingError};

/// Captured output of a healthy wired workstation, as the real tools
/// print it. Individual scenarios override single entries.
pub const ROUTE: &str =
    "8.8.8.8 via 192.168.1.1 dev eth0 src 192.168.1.50 uid 1000\n    cache\n";

pub const LINK: &str =
    "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP mode DEFAULT \
     group default qlen 1000\n    link/ether 3c:7c:3f:1a:2b:3c brd ff:ff:ff:ff:ff:ff\n";

pub const SETTINGS: &str = "Settings for eth0:\n\
    \tSupported ports: [ TP\t MII ]\n\
    \tSupported link modes:   10baseT/Half 10baseT/Full\n\
    \t                        100baseT/Half 100baseT/Full\n\
    \t                        1000baseT/Full\n\
    \tSpeed: 1000Mb/s\n\
    \tDuplex: Full\n\
    \tAuto-negotiation: on\n\
    \tLink detected: yes\n";

pub const ADDRESSES: &str =
    "2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP group default \
     qlen 1000\n    inet 192.168.1.50/24 brd 192.168.1.255 scope global eth0\n       \
     valid_lft forever preferred_lft forever\n";

pub const ANSWER: &str = "142.250.74.110\n";

/// `NetTooling` double replaying canned tool output.
pub struct ScriptedTooling {
    pub route: Result<String, ()>,
    pub link: Result<String, ()>,
    pub settings: Result<String, ()>,
    pub addresses: Result<String, ()>,
    pub answer: Result<String, ()>,
}

impl ScriptedTooling {
    pub fn healthy() -> Self {
        Self {
            route: Ok(ROUTE.to_string()),
            link: Ok(LINK.to_string()),
            settings: Ok(SETTINGS.to_string()),
            addresses: Ok(ADDRESSES.to_string()),
            answer: Ok(ANSWER.to_string()),
        }
    }

    fn replay(
        script: &Result<String, ()>,
        tool: &'static str,
    ) -> Result<String, ToolingError> {
        match script {
            Ok(text) => Ok(text.clone()),
            Err(()) => Err(ToolingError::Invocation {
                tool,
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            }),
        }
    }
}

impl NetTooling for ScriptedTooling {
    fn route_lookup(&self, _target: &str) -> Result<String, ToolingError> {
        Self::replay(&self.route, "ip route")
    }

    fn link_status(&self, _interface: &str) -> Result<String, ToolingError> {
        Self::replay(&self.link, "ip link")
    }

    fn link_settings(&self, _interface: &str) -> Result<String, ToolingError> {
        Self::replay(&self.settings, "ethtool")
    }

    fn address_listing(&self, _interface: &str) -> Result<String, ToolingError> {
        Self::replay(&self.addresses, "ip addr")
    }

    fn name_lookup(&self, _hostname: &str) -> Result<String, ToolingError> {
        Self::replay(&self.answer, "dig")
    }
}
