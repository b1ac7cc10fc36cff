use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use super::RegisterBank;
use crate::FP_LANE_COUNT;

// Snapshots of simulated architectural state have to be byte-stable across
// hosts, so the lanes are flattened to a big-endian byte buffer instead of
// letting the format encode a sequence of host integers.

impl Serialize for RegisterBank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple =
            serializer.serialize_struct("SerializedRegisterBank", 1)?;
        let mut buf = [0; FP_LANE_COUNT * 4];
        let mut out_n = 0;
        for lane in self.lanes() {
            buf[out_n..out_n + 4].copy_from_slice(&lane.to_be_bytes());
            out_n += 4;
        }
        tuple.serialize_field("lanes", &buf[..out_n])?;
        tuple.end()
    }
}

// Deserializing is much less performance-critical than serializing, so a
// derived deserializer and an intermediate struct keep it simple.

#[derive(Deserialize)]
struct SerializedRegisterBank {
    lanes: Vec<u8>,
}

impl<'de> Deserialize<'de> for RegisterBank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let intermediate = SerializedRegisterBank::deserialize(deserializer)?;
        if intermediate.lanes.len() != FP_LANE_COUNT * 4 {
            return Err(Error::invalid_length(
                intermediate.lanes.len(),
                &"expected 256 bytes of register bank data",
            ));
        }
        let mut ret = RegisterBank::new();
        for (i, bytes) in intermediate.lanes.chunks_exact(4).enumerate() {
            ret.set_lane(i as u32, u32::from_be_bytes(bytes.try_into().unwrap()));
        }
        Ok(ret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_restores_every_lane() {
        let mut bank = RegisterBank::new();
        bank.save_double(-0.0, 0);
        bank.save_double(f64::from_bits(0x7FF8_0000_DEAD_BEEF), 7);
        bank.save_float(1.5, 16);
        bank.set_lane(63, 0xCAFE_F00D);
        let json = serde_json::to_string(&bank).unwrap();
        let restored: RegisterBank = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.lanes(), bank.lanes());
    }

    #[test]
    fn wrong_length_snapshot_is_rejected() {
        let json = r#"{"lanes":[0,0,0,0]}"#;
        assert!(serde_json::from_str::<RegisterBank>(json).is_err());
    }
}
