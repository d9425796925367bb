//! Bus messages and the tongue-bound signature that seals an agent's
//! publication to its identity.

use serde::{Deserialize, Serialize};

use scbe_mnemonic::Tongue;
use scbe_pqc::QuantumSig;

use crate::error::BusResult;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub topic: String,
    pub key: String,
    pub value: Vec<u8>,
    pub headers: Vec<(String, String)>,
    pub timestamp_nanos: u64,
}

/// A message plus the tongue identity of the agent that published it and
/// a signature over both — a stolen message cannot be replayed under a
/// different tongue's name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedMessage {
    pub message: Message,
    pub tongue: Tongue,
    pub signature: Vec<u8>,
}

#[derive(Serialize)]
struct SignedBody<'a> {
    message: &'a Message,
    tongue: Tongue,
}

fn body_bytes(message: &Message, tongue: Tongue) -> BusResult<Vec<u8>> {
    Ok(scbe_platform::canonicalize(&SignedBody { message, tongue })?)
}

pub fn sign_message<S: QuantumSig>(message: Message, tongue: Tongue, signer: &S, signer_secret: &[u8]) -> BusResult<SignedMessage> {
    let bytes = body_bytes(&message, tongue)?;
    let signature = signer.sign(signer_secret, &bytes)?;
    Ok(SignedMessage { message, tongue, signature })
}

pub fn verify_signed_message<S: QuantumSig>(signed: &SignedMessage, signer: &S, signer_pub: &[u8]) -> BusResult<bool> {
    let bytes = body_bytes(&signed.message, signed.tongue)?;
    Ok(signer.verify(signer_pub, &bytes, &signed.signature)?)
}

/// Wraps a `SignedMessage` into the plain `Message` shape the bus
/// transports, so tongue-bound and unbound traffic share one wire type.
pub fn encode_signed(signed: &SignedMessage) -> BusResult<Message> {
    let value = serde_json::to_vec(signed)?;
    Ok(Message {
        topic: signed.message.topic.clone(),
        key: signed.message.key.clone(),
        value,
        headers: signed.message.headers.clone(),
        timestamp_nanos: signed.message.timestamp_nanos,
    })
}

pub fn decode_signed(message: &Message) -> BusResult<SignedMessage> {
    Ok(serde_json::from_slice(&message.value)?)
}
