use crate::core::open_enum::open_enum;

open_enum! {
    pub enum RecordType {
        A => "A",
        Aaaa => "AAAA",
        Caa => "CAA",
        Cname => "CNAME",
        Mx => "MX",
        Ns => "NS",
        Ptr => "PTR",
        Soa => "SOA",
        Srv => "SRV",
        Txt => "TXT",
    }
}
