/// A device status report: one device keyed by its serial number, with nested
/// state objects, arrays of measurement objects, and scattered nulls.
pub const DEVICE_STATUS: &[u8] = br#"{
  "012345678901": {
    "ident": {
      "type": {
        "key_localized": "Devicetype",
        "value_raw": 12,
        "value_localized": "Oven"
      },
      "deviceName": "",
      "deviceIdentLabel": {
        "fabNumber": "012345678",
        "fabIndex": "00",
        "techType": "H7464BP",
        "matNumber": "123456",
        "swids": ["4953", "20553", "25229", "4857", "25300", "25307"]
      },
      "xkmIdentLabel": {
        "techType": "EK037",
        "releaseVersion": "03.85"
      }
    },
    "state": {
      "ProgramID": {
        "value_raw": 24,
        "value_localized": "",
        "key_localized": "Program Id"
      },
      "status": {
        "value_raw": 5,
        "value_localized": "In use",
        "key_localized": "State"
      },
      "remainingTime": [0, 0],
      "targetTemperature": [
        { "value_raw": 18000, "value_localized": 180, "unit": "Celsius" },
        { "value_raw": -32768, "value_localized": null, "unit": "Celsius" }
      ],
      "temperature": [
        { "value_raw": 6967, "value_localized": 69.67, "unit": "Celsius" },
        { "value_raw": -32768, "value_localized": null, "unit": "Celsius" },
        { "value_raw": -32768, "value_localized": null, "unit": "Celsius" }
      ],
      "signalInfo": false,
      "signalDoor": false,
      "remoteEnable": {
        "fullRemoteControl": true,
        "smartGrid": false,
        "mobileStart": true
      },
      "light": 1,
      "spinningSpeed": {
        "unit": "rpm",
        "value_raw": null,
        "value_localized": null,
        "key_localized": "Spinning Speed"
      },
      "plateStep": [],
      "ecoFeedback": null,
      "batteryLevel": null
    }
  }
}"#;
