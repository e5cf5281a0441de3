#![no_main]

use civic_assistant::GatewayRequest;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(request) = serde_json::from_slice::<GatewayRequest>(data) else {
        return;
    };
    let encoded = serde_json::to_vec(&request).expect("decoded request must re-encode");
    let decoded: GatewayRequest =
        serde_json::from_slice(&encoded).expect("re-encoded request must decode");
    assert_eq!(decoded, request);
});
