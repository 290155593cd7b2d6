// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Base url of the FieldClimate API, version 1.
pub const FIELDCLIMATE_BASE_URL: &str = "https://api.fieldclimate.com/v1";

/// Prefix of the environment variables holding the HMAC keys.
pub const FIELDCLIMATE_ENV_PREFIX: &str = "FIELDCLIMATE";

// Env values, appended to the prefix: `{PREFIX}_PUBLIC_KEY`.
pub const PUBLIC_KEY_SUFFIX: &str = "PUBLIC_KEY";
pub const PRIVATE_KEY_SUFFIX: &str = "PRIVATE_KEY";

/// Media type requested from and sent to the API.
pub const APPLICATION_JSON: &str = "application/json";
