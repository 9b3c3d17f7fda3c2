//! Shared fixtures for unit tests.
//!
//! Wire payloads are taken from a regtest node (getminingcandidate, getinfo)
//! and a MinerID reference document. Expected roots are SHA-256d over exactly
//! the coinbase bytes listed here.

/// A coinbase hash and five-level branch from a getminingcandidate response.
pub mod candidate {
    pub const COINBASE_HASH: &str =
        "66140d22ba975c50f7383618a4ac7ca5dab919ae4e43f88b0ee79b7cbcccb25a";

    pub const MERKLE_BRANCHES: [&str; 5] = [
        "801fc07c69466a2216c55c185b69138fd98eb640abced94114868eada3adf180",
        "c1d8cec3243f0c689bc48545cf843e59c1efc859811024587defb9948fd76c18",
        "ffa3bf57d06df2dcf4158245b94f1211ea6b7e07690a099a6efd794eb7dbd5c4",
        "b558ea838bbc69498b3556c8ff85a2cd197b7295c1bd798308be2be53e940928",
        "dc93ffd1aec55cb7e030d3c22bb176ab2e991181fdc38e1c242132bd42e90e58",
    ];

    pub const MERKLE_ROOT: &str =
        "4613bbcb10e2d0192bc2f226baf2a973842bdb47053ecca90d8d4540ec5ec4c0";
}

/// Coinbase transaction bytes with known roots.
pub mod coinbase {
    pub const COINBASE: &str = "ffffffff011a0a5325000000001976a9145deb9155942e7d38febc15de8870222fd24d080e88ac00000000";

    /// Display-order txid of [`COINBASE`].
    pub const COINBASE_TXID: &str =
        "7c867bb107787c12e20be74ddaaa6363357464513bff703f55ea016cf02dcaa9";

    pub const PREV_HASH: &str =
        "000000000000000002d9865865d4d7b9dea7f3d09cf0ad51082a91c5d5acbd47";

    pub const TWO_BRANCHES: [&str; 2] = [
        "d4298cf4e2199228af168ad6a998e5bd656cdc7776b8151c37066983b6367a45",
        "887ed2c1fcabb86c70fbfdf2bed3fe8760448ca3cac10ed203e67225505fc750",
    ];

    /// Root with an empty branch: the txid itself.
    pub const ROOT_NO_BRANCHES: &str = COINBASE_TXID;

    pub const ROOT_TWO_BRANCHES: &str =
        "8c575d74dc7ffdb939d2c9ef8dd10262e6e1b9aa8d47ab96833ce92cbfee2ff2";

    /// Root of [`COINBASE`] under [`super::json::MINING_CANDIDATE`]'s proof.
    pub const ROOT_MINING_CANDIDATE: &str =
        "bd32fb9218e0eaf538faa5a3800959e0f45a2595423e54c576a7e59bf8dfd075";
}

/// JSON payloads as they arrive over RPC.
pub mod json {
    pub const MINING_CANDIDATE: &str = r#"{
        "id": "e706b0e6-793b-448f-a1ae-8ef54459eb72",
        "prevhash": "70f5701644897c92b60e98dbbfe72e1cfd7a2728c6fa3a29c4b4f6e986b0ccaa",
        "coinbaseValue": 5000000974,
        "version": 536870912,
        "nBits": "207fffff",
        "time": 1590152467,
        "height": 106,
        "num_tx": 4,
        "sizeWithoutCoinbase": 1052,
        "merkleProof": [
            "9bd12ce6508574b3163aadb14eab7bd862306da85b221eb284fb41d6012db98f",
            "56f04cc78ac493defced65dd58f4437c67bcc697b59778b0cd96c3c64c1b0bbf"
        ]
    }"#;

    pub const MINING_CANDIDATE_PREV_HASH: &str =
        "70f5701644897c92b60e98dbbfe72e1cfd7a2728c6fa3a29c4b4f6e986b0ccaa";

    pub const GET_INFO: &str = r#"{
        "version": 101000300,
        "protocolversion": 70015,
        "walletversion": 160300,
        "balance": 199.99997068,
        "blocks": 104,
        "timeoffset": 0,
        "connections": 4,
        "proxy": "",
        "difficulty": 4.656542373906925e-10,
        "testnet": false,
        "stn": false,
        "keypoololdest": 1575386196,
        "keypoolsize": 1999,
        "paytxfee": 0.00000000,
        "relayfee": 0.00000250,
        "errors": "",
        "maxblocksize": 9223372036854775807,
        "maxminedblocksize": 128000000,
        "maxstackmemoryusagepolicy": 100000000,
        "maxstackmemoryusageconsensus": 9223372036854775807
    }"#;

    pub const FEE_SPEC: &str = r#"{
        "fees": [
            {
                "feeType": "standard",
                "miningFee": { "satoshis": 1, "bytes": 1 },
                "relayFee": { "satoshis": 1, "bytes": 10 }
            },
            {
                "feeType": "data",
                "miningFee": { "satoshis": 2, "bytes": 1000 },
                "relayFee": { "satoshis": 1, "bytes": 10000 }
            }
        ]
    }"#;

    pub const MINER_ID_DOC: &str = r#"{
        "version": "0.1",
        "height": 624455,
        "prevMinerId": "022604665d3a186be9690231a279f8e18b800f4ce78caac2d51940c8c1c92a8354",
        "prevMinerIdSig": "3044022067452f9d9baeef327183e2f565c8c4d76299287d6c0253aa133c75150d78d307022029c9d93ac08c19e20a03dc32307c4f0a023e79a505c02b01857c84d49670acf6",
        "minerId": "022604665d3a186be9690231a279f8e18b800f4ce78caac2d51940c8c1c92a8354",
        "vctx": {
            "txid": "6584f53e13216d34979098362bda34bd3677058c8b4e0621b24395c576b6baad",
            "vout": 0
        }
    }"#;
}
