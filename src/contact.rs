//! Contact (QSO) domain record and its attribute subgroups.
//!
//! The record is wide and backend agnostic. On the wire every attribute is a
//! PascalCase key in one flat object: the subgroups below are flattened, so
//! `contacted.call` is `"Call"` and `station.my_gridsquare` is
//! `"MyGridsquare"`. Absent optional attributes are omitted entirely.

use serde::{Deserialize, Serialize};

use crate::types::{ContactId, LogbookId, SessionId};

/// A logged contact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContactRecord {
    /// Row identifier, `None` until persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,
    /// Owning logbook. Required on write.
    pub logbook_id: LogbookId,
    /// Operating session the contact was logged in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionId>,
    /// When, where on the spectrum, and how.
    #[serde(flatten)]
    pub qso: QsoDetails,
    /// The station that was worked.
    #[serde(flatten)]
    pub contacted: ContactedStation,
    /// The station doing the logging.
    #[serde(flatten)]
    pub station: LoggingStation,
    /// Confirmation and upload state.
    #[serde(flatten)]
    pub qsl: QslStatus,
}

/// Band, mode, frequency, timing and exchange of a contact.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QsoDetails {
    /// Band designator, e.g. `20m`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub band: String,
    /// Mode, e.g. `SSB`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mode: String,
    /// Frequency in MHz, e.g. `14.320`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub freq: String,
    /// Start date, `YYYYMMDD` or `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub qso_date: String,
    /// Start time, `HHMM` or `HH:MM`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_on: String,
    /// End time, `HHMM` or `HH:MM`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_off: String,
    /// Signal report sent.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rst_sent: String,
    /// Signal report received.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub rst_rcvd: String,

    /// Submode, e.g. `USB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submode: Option<String>,
    /// Receive frequency in MHz for split operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freq_rx: Option<String>,
    /// Receive band for cross-band operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band_rx: Option<String>,
    /// End date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qso_date_off: Option<String>,
    /// Transmit power in watts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tx_pwr: Option<String>,
    /// Contacted station's power in watts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_pwr: Option<String>,
    /// Propagation mode, e.g. `SAT`, `ES`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prop_mode: Option<String>,
    /// Satellite name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_name: Option<String>,
    /// Satellite uplink/downlink mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat_mode: Option<String>,
    /// Contest identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contest_id: Option<String>,
    /// Received serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx: Option<u32>,
    /// Received exchange text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_string: Option<String>,
    /// Sent serial number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stx: Option<u32>,
    /// Sent exchange text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stx_string: Option<String>,
    /// Short comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// `Y`, `N`, `NIL` or `?`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qso_complete: Option<String>,
    /// Whether the contact was random rather than scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qso_random: Option<bool>,
}

/// The station that was worked.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContactedStation {
    /// Contacted callsign.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub call: String,
    /// DXCC entity name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    /// Operator name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Contacted station location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qth: Option<String>,
    /// Maidenhead locator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridsquare: Option<String>,
    /// DXCC entity code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dxcc: Option<u32>,
    /// CQ zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cqz: Option<u32>,
    /// ITU zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ituz: Option<u32>,
    /// Continent code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cont: Option<String>,
    /// Primary administrative subdivision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Secondary administrative subdivision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnty: Option<String>,
    /// WPX prefix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pfx: Option<String>,
    /// IOTA designator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iota: Option<String>,
    /// SOTA summit reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sota_ref: Option<String>,
    /// POTA park reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pota_ref: Option<String>,
    /// Contacted operator e-mail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Contacted station's rig.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rig: Option<String>,
    /// Contacted station's antenna.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ant: Option<String>,
    /// Operator age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// The logging station.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LoggingStation {
    /// Callsign used on the air.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_callsign: Option<String>,
    /// Operator callsign, when different from the station callsign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,
    /// Station owner callsign.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_callsign: Option<String>,
    /// Logging station locator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_gridsquare: Option<String>,
    /// Logging station city.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_city: Option<String>,
    /// Logging station subdivision.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_state: Option<String>,
    /// Logging station DXCC entity name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_country: Option<String>,
    /// Logging station DXCC entity code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_dxcc: Option<u32>,
    /// Logging station CQ zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_cq_zone: Option<u32>,
    /// Logging station ITU zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_itu_zone: Option<u32>,
    /// Logging station rig.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_rig: Option<String>,
    /// Logging station antenna.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_antenna: Option<String>,
    /// Activated SOTA summit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_sota_ref: Option<String>,
    /// Activated POTA park.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub my_pota_ref: Option<String>,
}

/// Paper and online confirmation state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QslStatus {
    /// Paper QSL sent status (`Y`, `N`, `R`, `Q`, `I`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qsl_sent: Option<String>,
    /// Paper QSL received status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qsl_rcvd: Option<String>,
    /// Paper QSL sent date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qslsdate: Option<String>,
    /// Paper QSL received date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qslrdate: Option<String>,
    /// QSL manager or bureau route.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qsl_via: Option<String>,
    /// LoTW upload status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lotw_qsl_sent: Option<String>,
    /// LoTW confirmation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lotw_qsl_rcvd: Option<String>,
    /// LoTW upload date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lotw_qslsdate: Option<String>,
    /// LoTW confirmation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lotw_qslrdate: Option<String>,
    /// eQSL upload status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eqsl_qsl_sent: Option<String>,
    /// eQSL confirmation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eqsl_qsl_rcvd: Option<String>,
    /// Club Log upload date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clublog_qso_upload_date: Option<String>,
    /// Club Log upload status (`Y`, `N`, `M`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clublog_qso_upload_status: Option<String>,
    /// QRZ.com upload date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qrzcom_qso_upload_date: Option<String>,
    /// QRZ.com upload status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qrzcom_qso_upload_status: Option<String>,
    /// HRDLog upload date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrdlog_qso_upload_date: Option<String>,
    /// HRDLog upload status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hrdlog_qso_upload_status: Option<String>,
}

impl ContactRecord {
    /// Starts a record linked to `logbook_id` with the queried core fields set.
    pub fn new(logbook_id: LogbookId, call: impl Into<String>, band: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            logbook_id,
            qso: QsoDetails {
                band: band.into(),
                mode: mode.into(),
                ..QsoDetails::default()
            },
            contacted: ContactedStation {
                call: call.into(),
                ..ContactedStation::default()
            },
            ..Self::default()
        }
    }
}
