//! Enumerations used on the OCHP wire

wire_enum! {
    /// Operational status of a charge point, written inside `ChargePointStatusType`
    ChargePointStatus {
        Unknown => "Unknown",
        Operative => "Operative",
        Inoperative => "Inoperative",
        Planned => "Planned",
        Closed => "Closed",
    }
}

wire_enum! {
    /// Plug or socket standard, written inside `ConnectorStandard`
    ConnectorStandard {
        Chademo => "Chademo",
        Iec62196T1 => "IEC_62196_T1",
        Iec62196T1Combo => "IEC_62196_T1_COMBO",
        Iec62196T2 => "IEC_62196_T2",
        Iec62196T2Combo => "IEC_62196_T2_COMBO",
        Iec62196T3A => "IEC_62196_T3A",
        Iec62196T3C => "IEC_62196_T3C",
        DomesticA => "DOMESTIC_A",
        DomesticB => "DOMESTIC_B",
        DomesticC => "DOMESTIC_C",
        DomesticD => "DOMESTIC_D",
        DomesticE => "DOMESTIC_E",
        DomesticF => "DOMESTIC_F",
        DomesticG => "DOMESTIC_G",
        DomesticH => "DOMESTIC_H",
        DomesticI => "DOMESTIC_I",
        DomesticJ => "DOMESTIC_J",
        DomesticK => "DOMESTIC_K",
        DomesticL => "DOMESTIC_L",
        TeslaR => "TESLA_R",
        TeslaS => "TESLA_S",
        Iec60309SingleSixteen => "IEC_60309_2_single_16",
        Iec60309ThreeSixteen => "IEC_60309_2_three_16",
        Iec60309ThreeThirtyTwo => "IEC_60309_2_three_32",
        Iec60309ThreeSixtyFour => "IEC_60309_2_three_64",
    }
}

wire_enum! {
    /// Whether the vehicle plugs into a socket or uses an attached cable
    ConnectorFormat {
        Socket => "Socket",
        Cable => "Cable",
    }
}

wire_enum! {
    /// General type of the charge point location, written inside `GeneralLocationType`
    GeneralLocation {
        OnStreet => "on-street",
        ParkingGarage => "parking-garage",
        UndergroundGarage => "underground-garage",
        ParkingLot => "parking-lot",
        Private => "private",
        Other => "other",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// Restriction on who may park at a charge point
    ParkingRestriction {
        EvOnly => "evonly",
        Plugged => "plugged",
        Disabled => "disabled",
        Customers => "customers",
        Motorcycles => "motorcycles",
        Carsharing => "carsharing",
    }
}

wire_enum! {
    /// Authorisation method accepted at a charge point
    AuthMethod {
        Public => "Public",
        LocalKey => "LocalKey",
        DirectCash => "DirectCash",
        DirectCreditcard => "DirectCreditcard",
        DirectDebitcard => "DirectDebitcard",
        RfidMifareCls => "RfidMifareCls",
        RfidMifareDes => "RfidMifareDes",
        RfidCalypso => "RfidCalypso",
        Iec15118 => "Iec15118",
        OchpDirectAuth => "OchpDirectAuth",
        OperatorAuth => "OperatorAuth",
    }
}

wire_enum! {
    /// Purpose of an image attached to a charge point
    ImageClass {
        NetworkLogo => "networkLogo",
        OperatorLogo => "operatorLogo",
        OwnerLogo => "ownerLogo",
        StationPhoto => "stationPhoto",
        LocationPhoto => "locationPhoto",
        EntrancePhoto => "entrancePhoto",
        OtherPhoto => "otherPhoto",
        OtherLogo => "otherLogo",
        OtherGraphic => "otherGraphic",
    }
}

wire_enum! {
    /// Kind of web resource linked from a charge point
    RelatedResourceClass {
        OperatorMap => "operatorMap",
        OperatorPayment => "operatorPayment",
        StationInfo => "stationInfo",
        SurfaceMap => "surfaceMap",
        OwnerHomepage => "ownerHomepage",
        FeedbackForm => "feedbackForm",
    }
}

wire_enum! {
    /// Meaning of an additional geo point near a charge point
    RelatedLocationType {
        Entrance => "entrance",
        Exit => "exit",
        Access => "access",
        Ui => "ui",
        Other => "other",
    }
}

wire_enum! {
    /// Lifecycle state of a charge detail record, written inside `CdrStatusType`
    CdrStatus {
        New => "new",
        Accepted => "accepted",
        Rejected => "rejected",
        Declined => "declined",
        Approved => "approved",
        Revised => "revised",
    }
}

wire_enum! {
    /// What a charging period or price component is billed for
    BillingItem {
        ParkingTime => "parkingtime",
        UsageTime => "usagetime",
        Energy => "energy",
        Power => "power",
        ServiceFee => "serviceFee",
        SessionFee => "sessionFee",
        Reservation => "reservation",
    }
}

wire_enum! {
    /// Current type delivered by a charge point
    ChargePointType {
        Ac => "AC",
        Dc => "DC",
    }
}

wire_enum! {
    /// Medium of an e-mobility token
    TokenType {
        Rfid => "rfid",
        Remote => "remote",
        Iso15118 => "15118",
    }
}

wire_enum! {
    /// RFID chip family of an e-mobility token
    TokenSubType {
        MifareClassic => "mifareCls",
        MifareDesfire => "mifareDes",
        Calypso => "calypso",
    }
}

wire_enum! {
    /// How the token instance is represented: in clear or hashed
    TokenRepresentation {
        Plain => "plain",
        Sha160 => "sha-160",
        Sha256 => "sha-256",
    }
}

wire_enum! {
    /// Coarse availability of an EVSE
    EvseMajorStatus {
        Available => "available",
        NotAvailable => "not-available",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// Detailed availability of an EVSE
    EvseMinorStatus {
        Available => "available",
        Reserved => "reserved",
        Charging => "charging",
        Blocked => "blocked",
        OutOfOrder => "outoforder",
    }
}

wire_enum! {
    /// Availability of a parking spot
    ParkingSpotStatus {
        Available => "available",
        NotAvailable => "not-available",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// Operation requested by `ControlEVSE`
    DirectOperation {
        Start => "start",
        Change => "change",
        End => "end",
    }
}

wire_enum! {
    /// Kind of notification sent by `InformProvider`
    DirectMessage {
        Info => "info",
        Finished => "finished",
        Error => "error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_round_trips() {
        for value in ConnectorStandard::ALL {
            assert_eq!(value.as_str().parse::<ConnectorStandard>().unwrap(), *value);
        }
        for value in BillingItem::ALL {
            assert_eq!(value.to_string().parse::<BillingItem>().unwrap(), *value);
        }
    }

    #[test]
    fn test_wire_strings() {
        assert_eq!(GeneralLocation::OnStreet.as_str(), "on-street");
        assert_eq!(TokenType::Iso15118.as_str(), "15118");
        assert_eq!(" outoforder ".parse::<EvseMinorStatus>().unwrap(), EvseMinorStatus::OutOfOrder);
    }

    #[test]
    fn test_unknown_value() {
        let error = "cable".parse::<ConnectorFormat>().unwrap_err();
        assert_eq!(error.to_string(), "Unknown ConnectorFormat value: 'cable'");
        assert_eq!(" Cable ".parse::<ConnectorFormat>().unwrap(), ConnectorFormat::Cable);
    }

    #[test]
    fn test_serde_uses_wire_strings() {
        let json = serde_json::to_string(&EvseMajorStatus::NotAvailable).unwrap();
        assert_eq!(json, "\"not-available\"");
        let value: TokenType = serde_json::from_str("\"15118\"").unwrap();
        assert_eq!(value, TokenType::Iso15118);
    }
}
