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

/// Generates methods on a closed enum whose variants all wrap a type exposing
/// the same method, forwarding the call to the wrapped value.
///
/// ```ignore
/// impl Track {
///     enum_dispatch!(
///         [LocalAudio, LocalVideo, RemoteAudio, RemoteVideo];
///         pub fn sid(self: &Self) -> Option<TrackSid>;
///         pub fn stop(self: &Self);
///         pub async fn mute(self: &Self) -> FacadeResult<()>;
///     );
/// }
/// ```
#[macro_export]
macro_rules! enum_dispatch {
    // The arguments are forwarded as a single tt to avoid nested repetitions
    (@match [$($variant:ident),+]: $fnc:ident, $self:ident, $combined_args:tt) => {
        match $self {
            $(
                Self::$variant(inner) => inner.$fnc$combined_args,
            )+
        }
    };

    (@match_async [$($variant:ident),+]: $fnc:ident, $self:ident, $combined_args:tt) => {
        match $self {
            $(
                Self::$variant(inner) => inner.$fnc$combined_args.await,
            )+
        }
    };

    (@munch $variants:tt;) => {};

    (@munch $variants:tt;
        $vis:vis async fn $fnc:ident($self:ident: $sty:ty $(, $arg:ident: $t:ty)*) -> $ret:ty;
        $($rest:tt)*
    ) => {
        #[inline]
        $vis async fn $fnc($self: $sty, $($arg: $t),*) -> $ret {
            $crate::enum_dispatch!(@match_async $variants: $fnc, $self, ($($arg,)*))
        }
        $crate::enum_dispatch!(@munch $variants; $($rest)*);
    };

    (@munch $variants:tt;
        $vis:vis fn $fnc:ident($self:ident: $sty:ty $(, $arg:ident: $t:ty)*) -> $ret:ty;
        $($rest:tt)*
    ) => {
        #[inline]
        $vis fn $fnc($self: $sty, $($arg: $t),*) -> $ret {
            $crate::enum_dispatch!(@match $variants: $fnc, $self, ($($arg,)*))
        }
        $crate::enum_dispatch!(@munch $variants; $($rest)*);
    };

    // Functions without a return type
    (@munch $variants:tt;
        $vis:vis fn $fnc:ident($self:ident: $sty:ty $(, $arg:ident: $t:ty)*);
        $($rest:tt)*
    ) => {
        #[inline]
        $vis fn $fnc($self: $sty, $($arg: $t),*) {
            $crate::enum_dispatch!(@match $variants: $fnc, $self, ($($arg,)*))
        }
        $crate::enum_dispatch!(@munch $variants; $($rest)*);
    };

    ($variants:tt; $($body:tt)+) => {
        $crate::enum_dispatch!(@munch $variants; $($body)+);
    };
}
