// Copyright 2025 LiveKit, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// Declares a facade handle: a cheap clone of an `Arc` inner whose equality
/// is identity.
macro_rules! facade_handle {
    ($(#[$meta:meta])* $name:ident => $inner:ty) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name {
            pub(crate) inner: std::sync::Arc<$inner>,
        }

        impl $name {
            pub(crate) fn from_inner(inner: std::sync::Arc<$inner>) -> Self {
                Self { inner }
            }

            /// Identity of the wrapped client object.
            pub fn object_id(&self) -> tandem_rtc::ObjectId {
                self.inner.id
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                std::sync::Arc::ptr_eq(&self.inner, &other.inner)
            }
        }

        impl Eq for $name {}

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($name)).field("id", &self.inner.id).finish()
            }
        }
    };
}
