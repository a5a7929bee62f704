//! In-memory stand-ins for the switch and the vendor lookup service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use macsweep_common::error::{AuditError, AuditResult};
use macsweep_common::network::target::{Credentials, SwitchTarget};
use macsweep_common::session::{SessionConnector, SwitchSession};
use macsweep_common::vendors::VendorRepository;

pub const CISCO_TABLE: &str = "          Mac Address Table
-------------------------------------------

Vlan    Mac Address       Type        Ports
----    -----------       --------    -----
 All    0100.0ccc.cccc    STATIC      CPU
 All    0100.0ccc.cccd    STATIC      CPU
   1    0019.d2c4.1a2b    DYNAMIC     Gi0/1
   1    0019.d2c4.1a2c    DYNAMIC     CPU
  10    00a0.c914.c829    DYNAMIC     Gi0/2
  20    5254.0012.3456    STATIC      Po1
Total Mac Addresses for this criterion: 6
";

/// What happened on the fake switch during a run.
#[derive(Debug, Default)]
pub struct SwitchLog {
    pub logins: Vec<String>,
    pub commands: Vec<String>,
    pub disconnects: usize,
}

pub struct FakeSwitch {
    pub password: String,
    pub table: String,
    pub log: Arc<Mutex<SwitchLog>>,
}

impl FakeSwitch {
    pub fn new(table: &str) -> (Self, Arc<Mutex<SwitchLog>>) {
        let log = Arc::new(Mutex::new(SwitchLog::default()));
        let switch = Self {
            password: "cisco".to_string(),
            table: table.to_string(),
            log: log.clone(),
        };
        (switch, log)
    }
}

#[async_trait]
impl SessionConnector for FakeSwitch {
    async fn connect(
        &self,
        target: &SwitchTarget,
        credentials: &Credentials,
    ) -> AuditResult<Box<dyn SwitchSession>> {
        if credentials.password() != self.password {
            return Err(AuditError::connection(&target.address, "authentication rejected"));
        }
        self.log.lock().unwrap().logins.push(credentials.username.clone());
        Ok(Box::new(FakeSession {
            table: self.table.clone(),
            log: self.log.clone(),
        }))
    }
}

struct FakeSession {
    table: String,
    log: Arc<Mutex<SwitchLog>>,
}

#[async_trait]
impl SwitchSession for FakeSession {
    async fn send_command(&mut self, command: &str) -> AuditResult<String> {
        self.log.lock().unwrap().commands.push(command.to_string());
        Ok(self.table.clone())
    }

    async fn disconnect(self: Box<Self>) -> AuditResult<()> {
        self.log.lock().unwrap().disconnects += 1;
        Ok(())
    }
}

/// Vendor table keyed by MAC; `down` makes every lookup fail.
pub struct FakeVendors {
    pub known: HashMap<String, String>,
    pub down: bool,
    pub lookups: Arc<Mutex<Vec<String>>>,
}

impl FakeVendors {
    pub fn new(known: &[(&str, &str)]) -> (Self, Arc<Mutex<Vec<String>>>) {
        let lookups = Arc::new(Mutex::new(Vec::new()));
        let vendors = Self {
            known: known
                .iter()
                .map(|(mac, company)| (mac.to_string(), company.to_string()))
                .collect(),
            down: false,
            lookups: lookups.clone(),
        };
        (vendors, lookups)
    }
}

#[async_trait]
impl VendorRepository for FakeVendors {
    async fn get_vendor(&self, mac_address: &str) -> AuditResult<Option<String>> {
        self.lookups.lock().unwrap().push(mac_address.to_string());
        if self.down {
            return Err(AuditError::lookup(mac_address, "connection refused"));
        }
        Ok(self.known.get(mac_address).cloned())
    }
}
