use hickory_proto::rr::RecordType as HickoryRecordType;
use rootwalk_domain::RecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert domain RecordType → hickory RecordType (for building queries)
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::SOA => HickoryRecordType::SOA,
        }
    }

    /// Convert hickory RecordType → domain RecordType
    ///
    /// Returns `None` for types the resolver does not interpret.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            HickoryRecordType::SOA => Some(RecordType::SOA),
            _ => None,
        }
    }
}
